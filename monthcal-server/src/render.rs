//! HTML rendering for monthcal pages.
//!
//! Every function here is pure: the same input always yields the same markup.

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use monthcal_core::grid::DAYS_PER_WEEK;
use monthcal_core::{CalendarGrid, Cell, MonthRef};

const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const CSS: &str = "\
body { font-family: sans-serif; margin: 2rem; }
.calendar { max-width: 36rem; margin: 0 auto; }
nav { display: flex; justify-content: space-between; align-items: center; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 0.5rem; text-align: center; }
td.blank { background: #f5f5f5; }
";

/// URL of the month view for `month`.
pub fn month_path(month: MonthRef) -> String {
    format!("/calendar/{}/{}", month.year, month.month)
}

fn month_label(month: MonthRef) -> String {
    format!("{} {}", month.name(), month.year)
}

fn page(title: &str, head_extra: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (head_extra)
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body { (body) }
        }
    }
}

fn render_cell(cell: &Cell) -> Markup {
    match cell.day() {
        Some(day) => html! { td.day { (day) } },
        None => html! { td.blank {} },
    }
}

/// The month view: title, navigation links, and the day grid.
pub fn month_page(grid: &CalendarGrid) -> Markup {
    let title = format!("{} {}", grid.month_name(), grid.year());
    let previous = grid.previous();
    let next = grid.next();

    let body = html! {
        div.calendar {
            nav {
                a.prev href=(month_path(previous)) { "← " (month_label(previous)) }
                h1 { (title) }
                a.next href=(month_path(next)) { (month_label(next)) " →" }
            }
            table {
                thead {
                    tr {
                        @for label in WEEKDAY_LABELS {
                            th { (label) }
                        }
                    }
                }
                tbody {
                    @for week in grid.weeks() {
                        tr {
                            @for cell in week {
                                (render_cell(cell))
                            }
                            // Pad the final row out to a full week
                            @for _ in week.len()..DAYS_PER_WEEK {
                                (render_cell(&Cell::Blank))
                            }
                        }
                    }
                }
            }
        }
    };

    page(&title, html! {}, body)
}

/// Client-side redirect to the given month.
pub fn redirect_page(target: MonthRef) -> Markup {
    let path = month_path(target);
    // Path is digits and slashes only, safe to inline into the script.
    let script = format!("window.location.href = \"{path}\";");

    let head = html! {
        meta http-equiv="refresh" content={ "0; url=" (path) };
    };
    let body = html! {
        script { (PreEscaped(script)) }
        noscript {
            p { a href=(path) { (month_label(target)) } }
        }
    };

    page("monthcal", head, body)
}

/// Error page with a short human-readable message.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let body = html! {
        h1 { "Error: " (message) }
        p { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
        p { a href="/" { "Back to the current month" } }
    };

    page("monthcal error", html! {}, body)
}
