//! Markup formats for the views
//!
//! `HtmlMarkup` produces the fragments a web page drops into its list
//! containers. `PlainMarkup` produces terminal text.

use super::view::{EntryRow, OverviewView, TodayView};
use chrono::NaiveDate;

/// Shown when no entry is bucketed on today
pub const TODAY_EMPTY: &str = "NO WASTE TRACKED TODAY";

/// Shown when the store is empty
pub const OVERVIEW_EMPTY: &str = "No waste entries yet";

/// "TOTAL ENTRIES: n"
pub fn total_label(total: usize) -> String {
    format!("TOTAL ENTRIES: {}", total)
}

/// "Today is Sunday 10/18/26"
pub fn date_label(today: NaiveDate) -> String {
    format!("Today is {}", today.format("%A %m/%d/%y"))
}

/// Turns view models into surface content
pub trait Markup: Send + Sync {
    fn date_display(&self, today: NaiveDate) -> String {
        date_label(today)
    }

    fn today_list(&self, view: &TodayView) -> String;

    fn overview_list(&self, view: &OverviewView) -> String;

    fn total_count(&self, total: usize) -> String {
        total_label(total)
    }
}

/// Escape text for inclusion in HTML content and attribute values
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn today_list(&self, view: &TodayView) -> String {
        if view.is_empty() {
            return format!(r#"<div class="empty-state">{}</div>"#, TODAY_EMPTY);
        }

        view.rows
            .iter()
            .map(|row| {
                let item = escape_html(&row.item);
                format!(
                    concat!(
                        r#"<div class="waste-item">"#,
                        r#"<span class="waste-item-text">{item}</span>"#,
                        r#"<button class="btn btn-danger" data-entry-id="{id}" title="Delete {item}">"#,
                        r#"<span class="icon-minus"></span></button></div>"#,
                    ),
                    item = item,
                    id = escape_html(row.id.as_str()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn overview_list(&self, view: &OverviewView) -> String {
        if view.is_empty() {
            return format!(r#"<div class="empty-state">{}</div>"#, OVERVIEW_EMPTY);
        }

        view.rows
            .iter()
            .map(|row| {
                let item = escape_html(&row.item);
                format!(
                    concat!(
                        r#"<div class="waste-item"><div>"#,
                        r#"<div class="waste-item-text">{item}</div>"#,
                        r#"<div class="waste-item-date">{date}</div></div>"#,
                        r#"<button class="btn btn-danger btn-sm" data-entry-id="{id}" title="Delete {item}">"#,
                        r#"<span class="icon-trash"></span></button></div>"#,
                    ),
                    item = item,
                    date = escape_html(&row.date_label()),
                    id = escape_html(row.id.as_str()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Assemble a standalone page from already-rendered surface content
pub fn html_page(date_display: &str, today_list: &str, total_count: &str, all_entries: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Waste Tracker</title>
</head>
<body>
<header><h1>Waste Tracker</h1><p id="dateDisplay">{date}</p></header>
<section id="trackTab">
<h2>Today's Activity</h2>
<div id="todayWasteList">
{today}
</div>
</section>
<section id="overviewTab">
<h2>Overview</h2>
<p id="totalStats">{total}</p>
<div id="allWasteList">
{all}
</div>
</section>
</body>
</html>
"#,
        date = escape_html(date_display),
        today = today_list,
        total = escape_html(total_count),
        all = all_entries,
    )
}

/// Terminal text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkup;

impl Markup for PlainMarkup {
    fn today_list(&self, view: &TodayView) -> String {
        if view.is_empty() {
            return format!("  {}", TODAY_EMPTY);
        }

        let number_width = number_width(&view.rows);

        view.rows
            .iter()
            .map(|row| {
                format!(
                    "  {:<nw$}  {}  [id {}]",
                    format!("#{}", row.position),
                    row.item,
                    row.id,
                    nw = number_width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn overview_list(&self, view: &OverviewView) -> String {
        if view.is_empty() {
            return format!("  {}", OVERVIEW_EMPTY);
        }

        let width = view
            .rows
            .iter()
            .map(|row| row.item.chars().count())
            .max()
            .unwrap_or(0);
        let number_width = number_width(&view.rows);

        view.rows
            .iter()
            .map(|row| {
                format!(
                    "  {:<nw$}  {:<width$}  {}  [id {}]",
                    format!("#{}", row.position),
                    row.item,
                    row.date_label(),
                    row.id,
                    nw = number_width,
                    width = width
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Width of the widest "#n" label
fn number_width(rows: &[EntryRow]) -> usize {
    rows.iter()
        .map(|row| row.position.to_string().len() + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryStore, WasteEntry};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(day(18)), "Today is Sunday 10/18/26");
    }

    #[test]
    fn test_html_today_escapes_items() {
        let mut store = EntryStore::new();
        store.append(WasteEntry::new("1", "<script>alert(1)</script>", day(18), 1));

        let html = HtmlMarkup.today_list(&TodayView::build(&store, day(18)));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"data-entry-id="1""#));
    }

    #[test]
    fn test_html_empty_states() {
        let store = EntryStore::new();
        assert_eq!(
            HtmlMarkup.today_list(&TodayView::build(&store, day(18))),
            r#"<div class="empty-state">NO WASTE TRACKED TODAY</div>"#
        );
        assert_eq!(
            HtmlMarkup.overview_list(&OverviewView::build(&store)),
            r#"<div class="empty-state">No waste entries yet</div>"#
        );
        assert_eq!(HtmlMarkup.total_count(0), "TOTAL ENTRIES: 0");
    }

    #[test]
    fn test_html_overview_shows_date() {
        let mut store = EntryStore::new();
        store.append(WasteEntry::new("1", "cup", day(7), 1));

        let html = HtmlMarkup.overview_list(&OverviewView::build(&store));
        assert!(html.contains(r#"<div class="waste-item-date">10/07/2026</div>"#));
        assert!(html.contains("icon-trash"));
    }

    #[test]
    fn test_plain_lists() {
        let mut store = EntryStore::new();
        store.append(WasteEntry::new("1", "cup", day(18), 1));
        store.append(WasteEntry::new("2", "paper bag", day(17), 2));

        let today = PlainMarkup.today_list(&TodayView::build(&store, day(18)));
        assert_eq!(today, "  #2  cup  [id 1]");

        let overview = PlainMarkup.overview_list(&OverviewView::build(&store));
        assert_eq!(
            overview,
            "  #1  paper bag  10/17/2026  [id 2]\n  #2  cup        10/18/2026  [id 1]"
        );
    }

    #[test]
    fn test_plain_numbers_are_padded() {
        let mut store = EntryStore::new();
        for i in 0..10 {
            store.append(WasteEntry::new(i.to_string(), "cup", day(18), i));
        }

        let today = PlainMarkup.today_list(&TodayView::build(&store, day(18)));
        let lines: Vec<_> = today.lines().collect();
        assert_eq!(lines[0], "  #1   cup  [id 9]");
        assert_eq!(lines[9], "  #10  cup  [id 0]");
    }

    #[test]
    fn test_page_contains_fragments() {
        let page = html_page("Today is Sunday 10/18/26", "<i>t</i>", "TOTAL ENTRIES: 1", "<i>a</i>");
        assert!(page.contains(r#"<p id="dateDisplay">Today is Sunday 10/18/26</p>"#));
        assert!(page.contains("<i>t</i>"));
        assert!(page.contains(r#"<p id="totalStats">TOTAL ENTRIES: 1</p>"#));
    }
}
