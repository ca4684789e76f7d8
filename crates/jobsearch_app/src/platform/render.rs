use jobsearch_core::{
    AppViewModel, DetailView, FilterKey, FilterSet, HomeView, JobRowView, Route,
    RELATED_PAGE_SIZE,
};

/// Formats the view model as terminal lines for the current route.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    let who = view.user_name.as_deref().unwrap_or("guest");
    lines.push(format!("== {} | {} ==", route_title(view.route), who));

    match view.route {
        Route::Home => render_home(&mut lines, view),
        Route::Results => render_results(&mut lines, view),
        Route::Job(_) => match &view.detail {
            Some(detail) => render_detail(&mut lines, detail),
            None => lines.push("Loading...".to_string()),
        },
        Route::Auth => {
            lines.push("Sign in to continue: login <email> <password>".to_string());
        }
    }

    if let Some(notice) = &view.notice {
        lines.push(format!("! {notice}"));
    }
    lines
}

fn route_title(route: Route) -> String {
    match route {
        Route::Home => "Home".to_string(),
        Route::Results => "Search results".to_string(),
        Route::Job(job_id) => format!("Job #{job_id}"),
        Route::Auth => "Sign in".to_string(),
    }
}

fn render_home(lines: &mut Vec<String>, view: &AppViewModel) {
    let home: &HomeView = &view.home;
    lines.push(format!(
        "Search: \"{}\" in \"{}\"",
        view.pending.query, view.pending.city
    ));
    if !home.position_suggestions.is_empty() {
        lines.push(format!("  positions: {}", home.position_suggestions.join(", ")));
    }
    if !home.city_suggestions.is_empty() {
        lines.push(format!("  cities: {}", home.city_suggestions.join(", ")));
    }

    match &home.detected_city {
        Some(city) => lines.push(format!("Featured jobs near {city}:")),
        None => lines.push("Featured jobs:".to_string()),
    }
    if home.featured_loading {
        lines.push("  Loading...".to_string());
    } else {
        lines.extend(home.featured.iter().map(job_row));
    }
    if let Some(notice) = home.featured_notice {
        lines.push(format!("  ({notice})"));
    }

    if view.user_name.is_none() {
        return;
    }
    if !home.recent_searches.is_empty() {
        lines.push("Recent searches:".to_string());
        for entry in &home.recent_searches {
            let place = entry.location().map(|l| format!(" in {l}")).unwrap_or_default();
            lines.push(format!(
                "  {}{} ({} results)",
                entry.query, place, entry.results_count
            ));
        }
    }
    if !home.notifications.is_empty() {
        lines.push("Notifications:".to_string());
        for note in &home.notifications {
            let marker = if note.is_read { ' ' } else { '*' };
            lines.push(format!("  {marker} {}: {}", note.title, note.message));
        }
    }
    if !home.alerts.is_empty() {
        lines.push("Job alerts:".to_string());
        for alert in &home.alerts {
            lines.push(format!(
                "  {} in {} ({})",
                alert.keywords.join(", "),
                alert.location,
                alert.frequency
            ));
        }
    }
}

fn render_results(lines: &mut Vec<String>, view: &AppViewModel) {
    if !view.active_tags.is_empty() {
        let tags: Vec<String> = view
            .active_tags
            .iter()
            .map(|key| tag_label(&view.active, *key))
            .collect();
        lines.push(format!(
            "Selected filters ({}): {}",
            tags.len(),
            tags.join(" | ")
        ));
    }
    if !view.district_options.is_empty() {
        lines.push(format!("Districts: {}", view.district_options.join(", ")));
    }
    if view.loading {
        lines.push("Loading...".to_string());
        return;
    }
    if let Some(error) = &view.error {
        lines.push(error.clone());
        return;
    }
    lines.push(format!(
        "{} jobs | page {} of {}",
        view.total_results, view.current_page, view.total_pages
    ));
    if view.jobs.is_empty() {
        lines.push("No jobs match these filters.".to_string());
    }
    lines.extend(view.jobs.iter().map(job_row));
}

fn render_detail(lines: &mut Vec<String>, detail: &DetailView) {
    if let Some(error) = &detail.error {
        lines.push(error.clone());
        return;
    }
    let Some(job) = &detail.job else {
        lines.push("Loading...".to_string());
        return;
    };
    let summary = &job.summary;
    lines.push(format!("{} at {}", summary.title, summary.company));
    lines.push(format!("  {}", summary.location));
    let kinds: Vec<&str> = [summary.work_mode(), summary.job_type()]
        .into_iter()
        .flatten()
        .collect();
    if !kinds.is_empty() {
        lines.push(format!("  {}", kinds.join(" / ")));
    }
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => lines.push(format!("  Salary: {min:.0} - {max:.0}")),
        (Some(min), None) => lines.push(format!("  Salary: from {min:.0}")),
        (None, Some(max)) => lines.push(format!("  Salary: up to {max:.0}")),
        (None, None) => {}
    }
    if let Some(description) = &job.description {
        lines.push(String::new());
        lines.extend(description.lines().map(|line| format!("  {line}")));
    }
    lines.push(format!(
        "  [{}]",
        detail.apply.map(|status| status.label()).unwrap_or("Apply")
    ));

    let related_pages = detail.related_total.div_ceil(RELATED_PAGE_SIZE).max(1);
    lines.push(format!(
        "Related jobs (page {} of {}):",
        detail.related_page, related_pages
    ));
    lines.extend(detail.related.iter().map(job_row));
}

fn job_row(row: &JobRowView) -> String {
    let mut line = format!(
        "  [{}] #{} {} - {} ({})",
        row.badge, row.job_id, row.title, row.company, row.location
    );
    let kinds: Vec<&str> = [row.work_mode.as_deref(), row.job_type.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !kinds.is_empty() {
        line.push_str(&format!(" {}", kinds.join("/")));
    }
    if let Some(status) = row.apply {
        line.push_str(&format!(" <{}>", status.label()));
    }
    line
}

fn tag_label(filters: &FilterSet, key: FilterKey) -> String {
    match key {
        FilterKey::Query => format!("query: {}", filters.query),
        FilterKey::Location => format!("location: {}", filters.location),
        FilterKey::WorkPreference(mode) => mode.key().to_string(),
        FilterKey::DateFilter => filters.date_filter.label().to_string(),
        FilterKey::Country => filters.country.clone(),
        FilterKey::City => filters.city.clone(),
        FilterKey::District => filters.district.clone(),
    }
}
