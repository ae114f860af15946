//! Renders the view model into id-based DOM commands. Pure so it runs under
//! the native test harness.

use resumatch_core::{
    escape_html, AppViewModel, ErrorPanelView, MatchCardView, MatchTier, ResultsView, StepState,
    EMPTY_RESULTS_MESSAGE,
};

use super::constants::{
    ANALYZE_BUTTON, BUTTON_SPINNER, BUTTON_TEXT, FILE_INFO, FILE_NAME, LOADING_SECTION,
    LOADING_TEXT, PROGRESS_FILL, PROGRESS_PERCENTAGE, RESULT, RESULT_SECTION, STEP_IDS,
    UPLOAD_AREA, UPLOAD_PROMPT,
};
use crate::dom::UiCommand;

const ERROR_HEADLINE: &str = "Analysis Failed";

pub fn render(view: &AppViewModel) -> Vec<UiCommand> {
    let mut cmds = Vec::new();

    cmds.push(UiCommand::SetClass {
        id: UPLOAD_AREA,
        class: "dragover",
        on: view.drag_active,
    });
    cmds.push(UiCommand::SetVisible {
        id: UPLOAD_PROMPT,
        visible: view.selected_file.is_none(),
    });
    cmds.push(UiCommand::SetVisible {
        id: FILE_INFO,
        visible: view.selected_file.is_some(),
    });
    if let Some(file) = &view.selected_file {
        cmds.push(UiCommand::SetText {
            id: FILE_NAME,
            text: format!("{} ({})", file.name, format_bytes(file.size_bytes)),
        });
    }

    cmds.push(UiCommand::SetEnabled {
        id: ANALYZE_BUTTON,
        enabled: view.submit_enabled,
    });
    cmds.push(UiCommand::SetVisible {
        id: BUTTON_TEXT,
        visible: !view.submitting,
    });
    cmds.push(UiCommand::SetVisible {
        id: BUTTON_SPINNER,
        visible: view.submitting,
    });

    cmds.push(UiCommand::SetVisible {
        id: LOADING_SECTION,
        visible: view.progress.is_some(),
    });
    if let Some(progress) = &view.progress {
        cmds.push(UiCommand::SetText {
            id: LOADING_TEXT,
            text: progress.label.to_owned(),
        });
        cmds.push(UiCommand::SetStyle {
            id: PROGRESS_FILL,
            property: "width",
            value: format!("{:.2}%", progress.percent),
        });
        cmds.push(UiCommand::SetText {
            id: PROGRESS_PERCENTAGE,
            text: format!("{}%", progress.percent.round() as u32),
        });
        for (id, state) in STEP_IDS.iter().copied().zip(progress.steps.iter().copied()) {
            cmds.push(UiCommand::SetClass {
                id,
                class: "active",
                on: state == StepState::Active,
            });
            cmds.push(UiCommand::SetClass {
                id,
                class: "completed",
                on: state == StepState::Completed,
            });
        }
    }

    cmds.push(UiCommand::SetVisible {
        id: RESULT_SECTION,
        visible: view.results.is_some(),
    });
    if let Some(results) = &view.results {
        cmds.push(UiCommand::SetHtml {
            id: RESULT,
            html: results_html(results),
        });
    }

    cmds
}

fn results_html(results: &ResultsView) -> String {
    match results {
        ResultsView::Matches(cards) => {
            let mut html = String::from("<div class=\"job-matches\">");
            for card in cards {
                html.push_str(&card_html(card));
            }
            html.push_str("</div>");
            html
        }
        ResultsView::Empty => format!(
            "<div class=\"no-matches\"><p>{}</p></div>",
            EMPTY_RESULTS_MESSAGE
        ),
        ResultsView::Error(panel) => error_html(panel),
    }
}

fn card_html(card: &MatchCardView) -> String {
    format!(
        "<div class=\"job-card {tier}\">\
         <div class=\"job-header\">\
         <span class=\"job-icon\">{icon}</span>\
         <span class=\"job-title\">{job}</span>\
         <span class=\"job-percentage\">{percentage:.1}%</span>\
         </div>\
         <div class=\"job-level\">Match Quality: <strong>{level}</strong></div>\
         </div>",
        tier = tier_class(card.tier),
        icon = tier_icon(card.tier),
        job = escape_html(&card.job),
        percentage = card.percentage,
        level = escape_html(&card.level),
    )
}

fn error_html(panel: &ErrorPanelView) -> String {
    let mut hints = String::new();
    for hint in panel.hints {
        hints.push_str("<li>");
        hints.push_str(&escape_html(hint));
        hints.push_str("</li>");
    }
    format!(
        "<div class=\"error-panel\">\
         <h3>{headline}</h3>\
         <p class=\"error-message\">{message}</p>\
         <p class=\"error-hints-title\">If this keeps happening, check:</p>\
         <ul class=\"error-hints\">{hints}</ul>\
         </div>",
        headline = ERROR_HEADLINE,
        message = escape_html(panel.message),
        hints = hints,
    )
}

fn tier_class(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::Excellent => "tier-excellent",
        MatchTier::VeryHigh => "tier-very-high",
        MatchTier::High => "tier-high",
        MatchTier::Good => "tier-good",
        MatchTier::Moderate => "tier-moderate",
    }
}

fn tier_icon(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::Excellent => "\u{1F3C6}",
        MatchTier::VeryHigh => "\u{1F947}",
        MatchTier::High => "\u{2B50}",
        MatchTier::Good => "\u{1F44D}",
        MatchTier::Moderate => "\u{2705}",
    }
}

/// Human-readable size for the selected-file card.
fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.2} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{bytes:.0} B")
    }
}

#[cfg(test)]
mod tests {
    use resumatch_core::{sample, FileCardView, ERROR_HINTS};

    use super::*;

    fn text_of(cmds: &[UiCommand], target: &str) -> Option<String> {
        cmds.iter().find_map(|cmd| match cmd {
            UiCommand::SetText { id, text } if *id == target => Some(text.clone()),
            _ => None,
        })
    }

    fn html_of(cmds: &[UiCommand], target: &str) -> Option<String> {
        cmds.iter().find_map(|cmd| match cmd {
            UiCommand::SetHtml { id, html } if *id == target => Some(html.clone()),
            _ => None,
        })
    }

    #[test]
    fn idle_view_hides_the_dynamic_sections() {
        let cmds = render(&AppViewModel::default());

        assert!(cmds.contains(&UiCommand::SetVisible {
            id: LOADING_SECTION,
            visible: false,
        }));
        assert!(cmds.contains(&UiCommand::SetVisible {
            id: RESULT_SECTION,
            visible: false,
        }));
        assert!(cmds.contains(&UiCommand::SetVisible {
            id: FILE_INFO,
            visible: false,
        }));
        assert!(cmds.contains(&UiCommand::SetEnabled {
            id: ANALYZE_BUTTON,
            enabled: false,
        }));
    }

    #[test]
    fn selected_file_shows_name_and_size() {
        let view = AppViewModel {
            selected_file: Some(FileCardView {
                name: "resume.pdf".to_string(),
                size_bytes: 2 * 1024 * 1024,
            }),
            submit_enabled: true,
            ..AppViewModel::default()
        };
        let cmds = render(&view);

        assert_eq!(
            text_of(&cmds, FILE_NAME).unwrap(),
            "resume.pdf (2.00 MB)"
        );
        assert!(cmds.contains(&UiCommand::SetVisible {
            id: UPLOAD_PROMPT,
            visible: false,
        }));
    }

    #[test]
    fn submitting_view_drives_the_loading_section() {
        let snapshot = sample(5000);
        let expected_width = format!("{:.2}%", snapshot.percent);
        let view = AppViewModel {
            selected_file: Some(FileCardView {
                name: "resume.pdf".to_string(),
                size_bytes: 64 * 1024,
            }),
            submitting: true,
            progress: Some(snapshot.clone()),
            ..AppViewModel::default()
        };
        let cmds = render(&view);

        assert_eq!(text_of(&cmds, LOADING_TEXT).unwrap(), snapshot.label);
        assert!(cmds.contains(&UiCommand::SetStyle {
            id: PROGRESS_FILL,
            property: "width",
            value: expected_width,
        }));
        assert!(cmds.contains(&UiCommand::SetVisible {
            id: BUTTON_SPINNER,
            visible: true,
        }));
        // Third stage: first two steps completed, third active.
        assert!(cmds.contains(&UiCommand::SetClass {
            id: STEP_IDS[0],
            class: "completed",
            on: true,
        }));
        assert!(cmds.contains(&UiCommand::SetClass {
            id: STEP_IDS[2],
            class: "active",
            on: true,
        }));
        assert!(cmds.contains(&UiCommand::SetClass {
            id: STEP_IDS[3],
            class: "active",
            on: false,
        }));
    }

    #[test]
    fn match_cards_escape_service_text() {
        let view = AppViewModel {
            results: Some(ResultsView::Matches(vec![MatchCardView {
                job: "<script>alert('x')</script>Engineer".to_string(),
                percentage: 91.3,
                level: "Excellent Match".to_string(),
                tier: MatchTier::Excellent,
            }])),
            ..AppViewModel::default()
        };
        let html = html_of(&render(&view), RESULT).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("91.3%"));
        assert!(html.contains("tier-excellent"));
    }

    #[test]
    fn empty_results_render_the_empty_state() {
        let view = AppViewModel {
            results: Some(ResultsView::Empty),
            ..AppViewModel::default()
        };
        let html = html_of(&render(&view), RESULT).unwrap();

        assert!(html.contains(EMPTY_RESULTS_MESSAGE));
    }

    #[test]
    fn error_panel_lists_message_and_hints() {
        let view = AppViewModel {
            results: Some(ResultsView::Error(ErrorPanelView {
                message: "Server error occurred. Please try again or contact support.",
                hints: &ERROR_HINTS,
            })),
            ..AppViewModel::default()
        };
        let html = html_of(&render(&view), RESULT).unwrap();

        assert!(html.contains(ERROR_HEADLINE));
        assert!(html.contains("Server error occurred."));
        assert_eq!(html.matches("<li>").count(), ERROR_HINTS.len());
    }

    #[test]
    fn format_bytes_picks_sensible_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2.00 MB");
    }
}
