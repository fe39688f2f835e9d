// End-to-end pipeline over the panel's pure pieces: backend payload in,
// rendered markup and request URLs out. No network involved.

use unicorn_feedback_lib::api::FeedbackApiClient;
use unicorn_feedback_lib::records::{parse_feedback_payload, FeedbackSubmission, SelectionSet};
use unicorn_feedback_lib::settings::PanelSettings;
use unicorn_feedback_lib::table::{build_action_buttons, build_feedback_table};
use validator::Validate;

const BACKEND_PAYLOAD: &str = r#"[
    {"ID": "3", "FirstName": "Maya", "LastName": "Chen", "Feedback": "The unicorn was on time & friendly", "Sentiment": "POSITIVE", "Gender": null},
    {"ID": 7, "FirstName": "Noor", "LastName": "Haddad", "Feedback": null, "Sentiment": null, "Gender": null},
    {"ID": "9", "FirstName": "Liu", "LastName": "Wei"}
]"#;

fn panel_client() -> FeedbackApiClient {
    let settings = PanelSettings {
        api_base_url: "https://api.example.com/prod".to_string(),
        request_timeout_secs: 15,
        connect_timeout_secs: 5,
    };
    FeedbackApiClient::new(&settings).expect("client should build")
}

#[test]
fn test_payload_to_rendered_table() {
    let records = parse_feedback_payload(BACKEND_PAYLOAD);
    assert_eq!(records.len(), 3);

    let table = build_feedback_table(&records);
    // Header row plus one row per record
    assert_eq!(table.matches("<tr>").count(), 4);
    // Checkbox values carry the normalized ids, numeric or not
    for id in ["3", "7", "9"] {
        assert!(table.contains(&format!("value=\"{}\"", id)));
    }
    // Free-form feedback text is escaped; null fields render as empty cells
    assert!(table.contains("on time &amp; friendly"));
    assert!(!table.contains("null"));

    let buttons = build_action_buttons();
    assert!(buttons.contains("predictSentimentBtn"));
    assert!(buttons.contains("identifyGenderBtn"));
}

#[test]
fn test_checked_rows_to_action_urls() {
    // The page collects checked checkbox values in row order
    let selection: SelectionSet = ["3", "7", "9"].iter().map(|s| s.to_string()).collect();

    let client = panel_client();
    let sentiment = client.sentiment_url(&selection).expect("sentiment url");
    assert_eq!(
        sentiment.as_str(),
        "https://api.example.com/prod/predictsentiment?Id=3%2C7%2C9"
    );

    let gender = client.gender_url(&selection).expect("gender url");
    assert_eq!(
        gender.as_str(),
        "https://api.example.com/prod/identifygender?Id=3%2C7%2C9"
    );
}

#[test]
fn test_malformed_payload_renders_empty_table() {
    let records = parse_feedback_payload("{\"oops\": ");
    assert!(records.is_empty());

    // The page still gets a complete, empty table back
    let table = build_feedback_table(&records);
    assert_eq!(table.matches("<tr>").count(), 1);
    assert!(table.starts_with("<table>"));
    assert!(table.ends_with("</table>"));
}

#[test]
fn test_submission_validates_before_url_is_built() {
    let blank = FeedbackSubmission {
        first_name: "".to_string(),
        last_name: "Rivera".to_string(),
        feedback: "Great".to_string(),
    };
    assert!(blank.validate().is_err());

    let valid = FeedbackSubmission {
        first_name: "Sam".to_string(),
        last_name: "Rivera".to_string(),
        feedback: "Smooth ride, would book again".to_string(),
    };
    assert!(valid.validate().is_ok());

    let url = panel_client().entry_url(&valid);
    assert_eq!(
        url,
        "https://api.example.com/prod/enterfeedback?FirstName=Sam&LastName=Rivera&Feedback=Smooth%20ride%2C%20would%20book%20again"
    );
}
