use crate::api::Repository;

pub fn render_repository_list(repositories: &[Repository]) -> String {
    if repositories.is_empty() {
        return [
            "📭 No repositories found",
            "   💡 Start by adding your first repository:",
            "      codevigil add https://github.com/owner/repo",
        ]
        .join("\n");
    }

    let ids: Vec<String> = repositories.iter().map(|r| r.id().to_string()).collect();
    let width = ids.iter().map(|id| id.chars().count()).max().unwrap_or(0);

    let mut lines = vec![
        format!("📚 TRACKED REPOSITORIES ({})", repositories.len()),
        "─".repeat(26),
    ];
    for (id, repo) in ids.iter().zip(repositories) {
        lines.push(format!("  {id:<width$}  {}", repo.url));
    }
    lines.push(String::new());
    lines.push("💡 View metrics with: codevigil dashboard <owner/name>".to_string());
    lines.join("\n")
}
