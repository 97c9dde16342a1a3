use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Same characters as `encodeURIComponent` leaves untouched.
const TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Deep link that opens a chat with a prefilled text.
///
/// All non-digit characters of the phone number are dropped
/// and the country code is prepended as it is.
pub fn chat_link(country_code: &str, phone: &str, text: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!(
        "https://wa.me/{country_code}{digits}?text={}",
        utf8_percent_encode(text, TEXT)
    )
}

pub fn tour_enquiry_text(tour_title: &str) -> String {
    format!("Hi, I'm interested in the tour: {tour_title}")
}

pub fn enquiry_reply_text(name: &str) -> String {
    format!("Hi {name}, thank you for your enquiry about our tour. How can I help you?")
}
