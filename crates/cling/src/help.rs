//! Default usage text.
//!
//! ```text
//! Usage: demo [OPTION]...
//!   -h, --help                Show this help.
//!       --hello-world=<VALUE> Greet someone.
//! ```
//!
//! Only normal option routes are listed. The option column is padded to
//! the widest entry, measured in terminal display width.

use cling_dispatch::{OptionSpec, Route};
use unicode_width::UnicodeWidthStr;

/// Renders the option column for one spec, without padding.
pub fn option_column(spec: &OptionSpec) -> String {
    let mut column = String::from("  ");
    match spec.short() {
        Some(short) => {
            column.push('-');
            column.push(short);
            column.push_str(", ");
        }
        None => column.push_str("    "),
    }
    column.push_str(&spec.to_string());
    column
}

/// Renders the full usage text for `routes`.
pub fn render_usage(app_name: &str, routes: &[Route]) -> String {
    let entries: Vec<(String, &str)> = routes
        .iter()
        .filter_map(|route| {
            route
                .option_spec()
                .map(|spec| (option_column(spec), route.help_text()))
        })
        .collect();
    let width = entries
        .iter()
        .map(|(column, _)| column.width())
        .max()
        .unwrap_or(0);

    let mut out = format!("Usage: {app_name} [OPTION]...\n");
    for (column, help) in &entries {
        out.push_str(column);
        out.push_str(&" ".repeat(width - column.width()));
        out.push(' ');
        out.push_str(help);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cling_dispatch::RouteKind;

    fn route(long: &str, short: Option<&str>, help: &str) -> Route {
        Route::builder(RouteKind::classify(long, short).unwrap())
            .help(help)
            .handler_fn(|_| Ok(()))
            .build()
            .unwrap()
    }

    #[test]
    fn column_with_and_without_short() {
        let with = OptionSpec::new("help", Some("h")).unwrap();
        let without = OptionSpec::new("hello-world:", None).unwrap();
        assert_eq!(option_column(&with), "  -h, --help");
        assert_eq!(option_column(&without), "      --hello-world=<VALUE>");
    }

    #[test]
    fn single_route() {
        let usage = render_usage("app", &[route("help", Some("h"), "This Helptext.")]);
        assert_eq!(usage, "Usage: app [OPTION]...\n  -h, --help This Helptext.\n");
    }

    #[test]
    fn no_routes_is_header_only() {
        assert_eq!(render_usage("app", &[]), "Usage: app [OPTION]...\n");
    }

    #[test]
    fn special_routes_are_not_listed() {
        let usage = render_usage(
            "app",
            &[
                route(":*", None, "always"),
                route("verbose", Some("v"), "More output."),
            ],
        );
        assert_eq!(usage.lines().count(), 2);
        assert!(!usage.contains("always"));
    }

    #[test]
    fn padding_uses_display_width() {
        let usage = render_usage(
            "app",
            &[route("größe", None, "Size."), route("x", None, "X.")],
        );
        let lines: Vec<&str> = usage.lines().skip(1).collect();
        let help_at = |line: &str| line.find(" Size.").or_else(|| line.find(" X.")).unwrap();
        assert_eq!(
            lines[0][..help_at(lines[0])].width(),
            lines[1][..help_at(lines[1])].width()
        );
    }
}
