//! Outbound search links for a recommended destination.
//!
//! City and airport values are percent-encoded before they are placed in the
//! URL, so `New York` becomes `New%20York`.

use urlencoding::encode;

/// Accommodation search for a city
pub fn stays_url(city: &str) -> String {
    format!("https://www.booking.com/searchresults.html?ss={}", encode(city))
}

/// Flight search to an airport, keyed by the lowercase IATA code
pub fn flights_url(airport_code: &str) -> String {
    format!(
        "https://www.skyscanner.com/transport/flights-to/{}/",
        encode(&airport_code.to_lowercase())
    )
}

/// Web search for a city travel guide
pub fn guide_url(city: &str) -> String {
    format!("https://www.google.com/search?q={}+travel+guide", encode(city))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_city() {
        assert_eq!(stays_url("Kyoto"), "https://www.booking.com/searchresults.html?ss=Kyoto");
        assert_eq!(guide_url("Kyoto"), "https://www.google.com/search?q=Kyoto+travel+guide");
    }

    #[test]
    fn test_flights_lowercases_airport() {
        assert_eq!(flights_url("KIX"), "https://www.skyscanner.com/transport/flights-to/kix/");
    }

    #[test]
    fn test_multi_word_city_is_encoded() {
        assert_eq!(
            stays_url("New York"),
            "https://www.booking.com/searchresults.html?ss=New%20York"
        );
        assert_eq!(
            guide_url("New York"),
            "https://www.google.com/search?q=New%20York+travel+guide"
        );
    }
}
