use maud::{html, Markup};

/// Non-fatal degrade: a source could not be read.
pub fn warning_notice(message: &str) -> Markup {
    html! {
        div class="notification is-warning is-light" { (message) }
    }
}

/// Informational skip: not enough data for a comparison section.
pub fn info_notice(message: &str) -> Markup {
    html! {
        div class="notification is-info is-light" { (message) }
    }
}

/// Hard stop, e.g. no cities available at all.
pub fn error_notice(message: &str) -> Markup {
    html! {
        div class="notification is-danger" { (message) }
    }
}
