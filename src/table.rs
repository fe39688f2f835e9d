use crate::records::FeedbackRecord;

// Column layout: checkbox, name, feedback text, sentiment, gender.
const TABLE_OPEN: &str = "<table><col width=2%><col width=20%><col width=60%><col width=9%><col width=9%>\
<tr><th></th><th>Name</th><th><center>Feedback</center></th><th>Sentiment</th><th>Gender</th></tr>";

/// Render the feedback table. Each row carries a checkbox whose value is the
/// record ID, which is what the action buttons collect. Null analysis fields
/// render as empty cells, never as the word "null".
pub fn build_feedback_table(records: &[FeedbackRecord]) -> String {
    let mut table = String::from(TABLE_OPEN);
    for record in records {
        let name = format!("{} {}", record.first_name, record.last_name);
        let feedback = record.feedback.as_deref().unwrap_or("");
        let sentiment = record.sentiment.as_deref().unwrap_or("");
        let gender = record.gender.as_deref().unwrap_or("");
        table.push_str(&format!(
            "<tr><td><input type=\"checkbox\" class=\"selectedCb\" name=\"predict\" value=\"{}\"></td>\
<td>{}</td><td><label>{}</label></td><td>{}</td><td>{}</td></tr>",
            escape_html(&record.id),
            escape_html(&name),
            escape_html(feedback),
            escape_html(sentiment),
            escape_html(gender)
        ));
    }
    table.push_str("</table>");
    table
}

/// Render the action buttons shown under the table. The page wires click
/// handlers to these IDs after injecting the markup.
pub fn build_action_buttons() -> String {
    let mut buttons = String::from(
        "<button type=\"button\" id=\"predictSentimentBtn\">Predict Sentiment</button> ",
    );
    buttons.push_str("<button type=\"button\" id=\"identifyGenderBtn\">Identify Gender</button> ");
    buttons.push_str(
        "<br><br><button type=\"button\" id=\"enterFeedbackBtn\">Enter a New Customer Feedback</button>",
    );
    buttons
}

/// Escape text for safe interpolation into HTML. Feedback text is free-form
/// customer input and must not be able to inject markup into the panel.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
