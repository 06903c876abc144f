use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::templates::components::{navbar, theme_toggle};

pub struct PageConfig<'a> {
    pub title: &'a str,
    pub api_base: &'a str,
    pub current_page: CurrentPage,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CurrentPage {
    Dashboard,
    RawData,
}

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
                link rel="stylesheet" href="/static/styles.css";
                script src="https://cdn.jsdelivr.net/npm/htmx.org@1.9.10/dist/htmx.min.js" {}
                // Apply saved theme before page renders to prevent flash
                script { (PreEscaped(THEME_INIT_SCRIPT)) }
            }
            body {
                script {
                    (PreEscaped(format!("const API_BASE = \"{}\";", config.api_base)))
                }

                section class="section" {
                    div class="container" {
                        nav class="level mb-4" {
                            div class="level-left" {
                                a href="/" class="has-text-current" style="text-decoration: none;" {
                                    h1 class="title level-item" { "Cityweather" }
                                }
                            }
                            div class="level-right" {
                                p class="level-item" {
                                    (theme_toggle())
                                    a href="/docs" class="button is-link is-light is-small ml-2" {
                                        "API Docs"
                                    }
                                }
                            }
                        }

                        (navbar(config.current_page))

                        div id="main-content" {
                            (content)
                        }
                    }
                }
            }
        }
    }
}

/// Script to initialize theme from localStorage before page renders
const THEME_INIT_SCRIPT: &str = r#"
(function() {
    const saved = localStorage.getItem('theme');
    if (saved) {
        document.documentElement.setAttribute('data-theme', saved);
    } else if (window.matchMedia('(prefers-color-scheme: dark)').matches) {
        document.documentElement.setAttribute('data-theme', 'dark');
    }
})();
"#;
