use crate::catalog::{category_counts, filter_projects, CatalogStats, CategoryFilter, ProjectQuery};
use crate::config::Config;
use crate::content::DetailContent;
use crate::models::Project;

use super::layout::{self, escape, PageMeta};
use super::markdown;

const PLACEHOLDER_COVER: &str = "/placeholder.svg";
const CARD_TAG_LIMIT: usize = 3;
const CARD_TECH_LIMIT: usize = 4;

/// Badges for the first `limit` items plus a `+N` overflow badge.
fn badges(items: &[String], limit: usize, class: &str) -> String {
    let mut html: String = items
        .iter()
        .take(limit)
        .map(|item| format!("<span class=\"badge {class}\">{}</span> ", escape(item)))
        .collect();
    if items.len() > limit {
        html.push_str(&format!(
            "<span class=\"badge {class}\">+{}</span>",
            items.len() - limit
        ));
    }
    html
}

pub fn category_badge(project: &Project) -> String {
    format!(
        "<span class=\"badge {}\">{}</span>",
        project.category.css_class(),
        escape(project.category.label())
    )
}

/// Summary card used on the home page and the project list.
pub fn project_card(project: &Project) -> String {
    let cover = project.cover_image.as_deref().unwrap_or(PLACEHOLDER_COVER);
    let featured = if project.featured {
        "<span class=\"badge featured\">Featured</span>"
    } else {
        ""
    };
    let secondary_link = match (
        safe_url(project.download_url.as_deref()),
        safe_url(project.github_url.as_deref()),
    ) {
        (Some(url), _) => format!("<a href=\"{}\" target=\"_blank\">Download</a>", escape(url)),
        (None, Some(url)) => format!("<a href=\"{}\" target=\"_blank\">Source</a>", escape(url)),
        (None, None) => String::new(),
    };

    format!(
        "<article class=\"card project\" data-category=\"{category}\">\n\
         <img src=\"{cover}\" alt=\"{title}\" loading=\"lazy\">\n\
         <div>{badge} {featured}</div>\n\
         <h3>{title}</h3>\n\
         <p class=\"role\">{role}</p>\n\
         <p class=\"dates\">{dates}</p>\n\
         <p>{summary}</p>\n\
         <div class=\"tags\">{tags}</div>\n\
         <h4>Technologies:</h4>\n<div class=\"tech\">{tech}</div>\n\
         <p class=\"actions\"><a href=\"/projects/{id}\">View Details</a> {secondary_link}</p>\n\
         </article>\n",
        category = escape(project.category.label()),
        cover = escape(cover),
        title = escape(&project.title),
        badge = category_badge(project),
        role = escape(&project.role),
        dates = project.dates.display_short(),
        summary = escape(&project.summary),
        tags = badges(&project.tags, CARD_TAG_LIMIT, "outline"),
        tech = badges(&project.tech, CARD_TECH_LIMIT, "secondary"),
        id = urlencoding::encode(&project.id),
    )
}

fn filter_href(filter: CategoryFilter, search: &str) -> String {
    let mut href = format!("/projects?category={}", urlencoding::encode(filter.label()));
    if !search.is_empty() {
        href.push_str(&format!("&q={}", urlencoding::encode(search)));
    }
    href
}

fn filter_button(filter: CategoryFilter, count: usize, query: &ProjectQuery) -> String {
    let class = if filter == query.category {
        "filter active"
    } else {
        "filter"
    };
    format!(
        "<a class=\"{class}\" href=\"{href}\">{label} <span class=\"badge\">{count}</span></a>\n",
        href = escape(&filter_href(filter, &query.search)),
        label = escape(filter.label()),
    )
}

/// GET /projects
pub fn render_list(config: &Config, projects: &[Project], query: &ProjectQuery) -> String {
    let filtered = filter_projects(projects, query);

    let mut filters = filter_button(CategoryFilter::All, projects.len(), query);
    for count in category_counts(projects) {
        filters.push_str(&filter_button(
            CategoryFilter::Only(count.category),
            count.count,
            query,
        ));
    }

    let results = if filtered.is_empty() {
        format!(
            "<div class=\"empty\">\n<h3>No projects found</h3>\n\
             <p>Try adjusting your search terms or filter selection.</p>\n\
             <p><a href=\"{clear}\">Clear search</a> <a href=\"/projects\">Show all projects</a></p>\n\
             </div>\n",
            clear = escape(&filter_href(query.category, "")),
        )
    } else {
        let cards: String = filtered.iter().map(|p| project_card(p)).collect();
        let stats = CatalogStats::from_projects(projects);
        format!(
            "<div class=\"grid\">\n{cards}</div>\n\
             <section class=\"stats\">\n\
             <div><strong>{}</strong> Total Projects</div>\n\
             <div><strong>{}</strong> Specializations</div>\n\
             <div><strong>{}</strong> Featured Projects</div>\n\
             </section>\n",
            stats.total_projects, stats.specializations, stats.featured_projects,
        )
    };

    let body = format!(
        "<section class=\"intro\">\n<h1>Projects</h1>\n\
         <p>Explore my portfolio of cybersecurity, system administration, and AI projects. \
         Each project demonstrates real-world problem-solving and technical expertise.</p>\n\
         <form method=\"get\" action=\"/projects\" role=\"search\">\n\
         <input type=\"hidden\" name=\"category\" value=\"{category}\">\n\
         <input type=\"search\" name=\"q\" value=\"{search}\" placeholder=\"Search projects...\">\n\
         <button type=\"submit\">Search</button>\n</form>\n\
         <nav class=\"filters\">\n{filters}</nav>\n</section>\n\
         <section>\n{results}</section>\n",
        category = escape(query.category.label()),
        search = escape(&query.search),
    );

    let meta = PageMeta::new(
        format!("Projects | {}", config.site_owner),
        "Cybersecurity, system administration and AI projects.",
        "/projects",
    );
    layout::render(config, &meta, &body)
}

fn safe_url(url: Option<&str>) -> Option<&str> {
    url.filter(|u| markdown::is_allowed_url(u))
}

/// GET /projects/:id
pub fn render_detail(config: &Config, project: &Project, detail: &DetailContent) -> String {
    let cover = project.cover_image.as_deref().unwrap_or(PLACEHOLDER_COVER);
    let dates = project.dates.display_long();
    // Front matter wins over the catalog record; unsafe schemes are dropped.
    let download = safe_url(detail.front_matter.download.as_deref())
        .or_else(|| safe_url(project.download_url.as_deref()));
    let repo = safe_url(detail.front_matter.repo.as_deref())
        .or_else(|| safe_url(project.github_url.as_deref()));

    let mut links = String::new();
    if let Some(url) = download {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\">Download Source Code</a>\n",
            escape(url)
        ));
    }
    if let Some(url) = repo {
        links.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\">View on GitHub</a>\n",
            escape(url)
        ));
    }
    let links_card = if links.is_empty() {
        String::new()
    } else {
        format!("<section class=\"card\">\n<h3>Download Source</h3>\n{links}</section>\n")
    };

    let tags: String = project
        .tags
        .iter()
        .map(|t| format!("<span class=\"badge outline\">{}</span> ", escape(t)))
        .collect();
    let tech: String = project
        .tech
        .iter()
        .map(|t| format!("<span class=\"badge secondary\">{}</span> ", escape(t)))
        .collect();
    let featured = if project.featured {
        "<dt>Featured Project</dt>\n"
    } else {
        ""
    };
    let id = urlencoding::encode(&project.id);

    let body = format!(
        "<p><a href=\"/projects\">&larr; Back to Projects</a></p>\n\
         <section class=\"project-header\">\n\
         <img src=\"{cover}\" alt=\"{title}\">\n\
         {badge}\n<h1>{title}</h1>\n<p class=\"summary\">{summary}</p>\n\
         <p class=\"meta\"><span>{role}</span> <span>{dates}</span> <span>{reading_time}</span></p>\n\
         <div class=\"tags\">{tags}</div>\n</section>\n\
         <div class=\"project-body\">\n<article class=\"card content\">\n{content}</article>\n\
         <aside>\n{links_card}\
         <section class=\"card\">\n<h3>Technologies</h3>\n<div>{tech}</div>\n</section>\n\
         <section class=\"card\">\n<h3>Project Details</h3>\n<dl>\n\
         <dt>Category</dt><dd>{category}</dd>\n<dt>Role</dt><dd>{role}</dd>\n\
         <dt>Duration</dt><dd>{dates}</dd>\n{featured}</dl>\n</section>\n\
         <section class=\"card\">\n<h3>Share Project</h3>\n\
         <a href=\"/projects/{id}\">Copy Link</a>\n</section>\n\
         </aside>\n</div>\n\
         <section class=\"card cta\">\n<h3>Explore More Projects</h3>\n\
         <p>Discover other cybersecurity, system administration, and AI projects in my portfolio.</p>\n\
         <a href=\"/projects\">View All Projects</a>\n</section>\n",
        cover = escape(cover),
        title = escape(&project.title),
        badge = category_badge(project),
        summary = escape(&project.summary),
        role = escape(&project.role),
        reading_time = escape(&detail.reading_time),
        content = markdown::render(&detail.body),
        category = escape(project.category.label()),
    );

    let meta = PageMeta::new(
        format!("{} | {}", project.title, config.site_owner),
        project.summary.clone(),
        "/projects",
    )
    .with_og_image(project.og_image_path());
    layout::render(config, &meta, &body)
}

/// Unknown project id.
pub fn render_not_found(config: &Config) -> String {
    let body = "<section class=\"card not-found\">\n<h1>Project Not Found</h1>\n\
                <p>The project you're looking for doesn't exist or may have been moved.</p>\n\
                <p>This could happen if the project URL is incorrect or the project has been removed from the portfolio.</p>\n\
                <p><a href=\"/projects\">&larr; Back to Projects</a> <a href=\"/\">Go Home</a></p>\n\
                </section>\n";
    let meta = PageMeta::new(
        format!("Project Not Found | {}", config.site_owner),
        "The requested project does not exist.",
        "/projects",
    );
    layout::render(config, &meta, body)
}
