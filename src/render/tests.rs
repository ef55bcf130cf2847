//! Tests for render module

#[cfg(test)]
mod tests {
    use crate::error::DashboardError;
    use crate::render::{escape_html, view, Element};
    use crate::types::{AnalysisResult, BatchSummary, CommentItem, UploadResponse};

    fn unescape(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    fn item(text: &str, label: &str, polarity: f64) -> CommentItem {
        CommentItem {
            text: text.to_string(),
            label: label.to_string(),
            polarity,
            emoji: "😐".to_string(),
        }
    }

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_empty_and_absent() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html(None::<&str>), "");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("great job 🙂"), "great job 🙂");
    }

    #[test]
    fn test_escape_leaves_no_special_characters_and_round_trips() {
        let inputs = [
            "&",
            "<<>>",
            "\"'\"'",
            "a & b < c > d \" e ' f",
            "&amp; already escaped",
            "<script>alert('x')</script>",
            "mixed ünïcödé & <tags>",
        ];
        for input in inputs {
            let escaped = escape_html(input);
            assert!(
                !escaped.contains(['<', '>', '"', '\'']),
                "raw character left in {:?}",
                escaped
            );
            // every remaining '&' starts an entity
            for (i, _) in escaped.match_indices('&') {
                let rest = &escaped[i..];
                assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                        .iter()
                        .any(|e| rest.starts_with(e)),
                    "bare ampersand in {:?}",
                    escaped
                );
            }
            assert_eq!(unescape(&escaped), input);
        }
    }

    #[test]
    fn test_element_escapes_text_and_attributes() {
        let html = Element::new("p")
            .class("quote")
            .attr("title", "\"quoted\"")
            .text("<b>bold</b>")
            .render();
        assert_eq!(
            html,
            "<p class=\"quote\" title=\"&quot;quoted&quot;\">&lt;b&gt;bold&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_void_element() {
        let html = Element::new("meta").attr("charset", "utf-8").render();
        assert_eq!(html, "<meta charset=\"utf-8\">");
    }

    #[test]
    fn test_to_text_splits_blocks() {
        let tree = Element::new("div")
            .child(Element::new("p").text("first"))
            .child(Element::new("p").text("second"));
        assert_eq!(tree.to_text(), "first\nsecond");
    }

    #[test]
    fn test_single_result_view() {
        let result = AnalysisResult {
            sentiment: "Positive".to_string(),
            polarity: 0.8,
            emoji: "🙂".to_string(),
        };
        let html = view::single_result(&result, "great job").render();
        assert!(html.contains("<strong>Positive</strong>"));
        assert!(html.contains("🙂"));
        assert!(html.contains("Polarity: 0.8"));
        assert!(html.contains("&quot;great job&quot;"));
    }

    #[test]
    fn test_single_result_escapes_comment() {
        let result = AnalysisResult {
            sentiment: "Neutral".to_string(),
            polarity: 0.0,
            emoji: "😐".to_string(),
        };
        let html = view::single_result(&result, "<img src=x onerror=alert(1)>").render();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_single_result_escapes_service_fields() {
        let result = AnalysisResult {
            sentiment: "<i>Positive</i>".to_string(),
            polarity: 0.5,
            emoji: "<script>".to_string(),
        };
        let html = view::single_result(&result, "ok").render();
        assert!(!html.contains("<i>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_analysis_outcome_error_is_generic() {
        let outcome = Err(DashboardError::Status(500));
        let text = view::analysis_outcome(&outcome, "anything").to_text();
        assert_eq!(text, view::ANALYZE_FAILED);
    }

    #[test]
    fn test_upload_outcome_service_error_verbatim() {
        let outcome = Ok(UploadResponse::Failed {
            error: "bad file".to_string(),
        });
        let el = view::upload_outcome(&outcome);
        assert_eq!(el.get_attr("class"), Some("error"));
        assert_eq!(el.to_text(), "bad file");
    }

    #[test]
    fn test_summary_stats_uses_supplied_percentages() {
        let summary = BatchSummary {
            total: 5,
            positive: 3,
            negative: 1,
            neutral: 1,
            positive_pct: 60.0,
            negative_pct: 20.0,
            neutral_pct: 33.33,
            items: vec![],
        };
        let text = view::summary_stats(&summary).to_text();
        assert_eq!(
            text,
            "Positive: 3 (60%)\nNegative: 1 (20%)\nNeutral: 1 (33.33%)"
        );
    }

    #[test]
    fn test_top_list_empty_placeholder() {
        let el = view::top_list(&[]);
        assert_eq!(el.to_text(), "No comments to display.");
    }

    #[test]
    fn test_top_list_renders_items_in_order() {
        let items = vec![item("first & best", "Positive", 0.5), item("meh", "Neutral", 0.0)];
        let el = view::top_list(&items);
        assert_eq!(el.elements().count(), 2);
        let html = el.render();
        assert!(html.contains("first &amp; best"));
        assert!(html.contains("Positive (0.5)"));
        assert!(html.find("first").unwrap() < html.find("meh").unwrap());
    }

    #[test]
    fn test_negative_zero_polarity_shows_zero() {
        let result = AnalysisResult {
            sentiment: "Neutral".to_string(),
            polarity: -0.0,
            emoji: "x".to_string(),
        };
        let text = view::single_result(&result, "hm").to_text();
        assert!(text.contains("Polarity: 0"));
        assert!(!text.contains("-0"));

        let html = view::comment_item(&item("hm", "Neutral", -0.0)).render();
        assert!(html.contains("Neutral (0)"));
        assert_eq!(view::display_number(-0.25), -0.25);
    }
}
