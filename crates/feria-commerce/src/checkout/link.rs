//! Deep-link construction for the messaging collaborator.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves unescaped besides alphanumerics.
/// The rendering layer hands these links straight to the browser, so the
/// encoding must match what the page itself would produce.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode message text for a `text` query parameter.
pub fn encode_message(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Build a chat deep link for `number` carrying `message` as the text query.
pub fn message_link(base_url: &str, number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        number,
        encode_message(message)
    )
}
