//! The built-in travel intent table.
//!
//! Order is the disambiguation mechanism: specific patterns sit before
//! general catch-alls, and the first match wins. All patterns compile
//! case-insensitively; city-capturing patterns expose the city as the first
//! capture group.

use std::sync::Arc;
use wayfarer_core::error::RuleError;
use wayfarer_core::rule::{IntentAction, IntentRule, RuleTable};
use wayfarer_core::weather::WeatherSource;

use crate::actions::WeatherAction;
use crate::pattern::RegexPattern;

/// Build the travel-assistant rule table over the given weather source.
pub fn travel_rules(weather: Arc<dyn WeatherSource>) -> Result<RuleTable, RuleError> {
    let weather_action: Arc<dyn IntentAction> = Arc::new(WeatherAction::new(weather));

    let rules = vec![
        IntentRule::reply(
            "Account Management",
            RegexPattern::compile_all("Account Management", &[r"login", r"reset.*password"])?,
            "For login or password reset issues, please visit your account settings \
             or use the 'Forgot Password' option.",
        ),
        IntentRule::reply(
            "Booking & Reservations",
            RegexPattern::compile_all(
                "Booking & Reservations",
                &[
                    r"book.*flight",
                    r"hotel.*(?:reserve|book|find)",
                    r"rental.*car",
                    r"rent.*car",
                ],
            )?,
            "I'd love to help you with bookings. Please provide the destination, \
             dates, and your budget.",
        ),
        IntentRule::action(
            "Weather",
            RegexPattern::compile_all(
                "Weather",
                &[
                    r"weather.*in ([a-zA-Z\s]+)",
                    r"what.*weather.*in ([a-zA-Z\s]+)",
                    r"how.*weather.*in ([a-zA-Z\s]+)",
                ],
            )?,
            weather_action.clone(),
        ),
        IntentRule::action(
            "Forecast",
            RegexPattern::compile_all(
                "Forecast",
                &[
                    r"will it rain.*in ([a-zA-Z\s]+)",
                    r"forecast.*in ([a-zA-Z\s]+)",
                    r"rain.*tomorrow.*in ([a-zA-Z\s]+)",
                ],
            )?,
            weather_action,
        ),
        IntentRule::reply(
            "Travel Assistance",
            RegexPattern::compile_all(
                "Travel Assistance",
                &[
                    r"visa\s+(?:for\s+)?([a-zA-Z\s]+)",
                    r"do\s+i\s+need\s+(?:a\s+)?visa",
                    r"exchange.*rate",
                    r"top.*(?:spots|places).*in ([a-zA-Z\s]+)",
                    r"what\s+tourist\s+(?:spots|places).*in ([a-zA-Z\s]+)",
                ],
            )?,
            "I can assist with visa information, currency exchange rates, and local \
             attractions. Please specify the country or city you're interested in.",
        ),
        IntentRule::reply(
            "Technical Support",
            RegexPattern::compile_all(
                "Technical Support",
                &[
                    r"app.*(?:crash|not working)",
                    r"payment.*(?:fail|issue)",
                    r"dark mode",
                ],
            )?,
            "Thank you for your feedback. For app crashes, please try reinstalling \
             the application. We're continuously working on improvements, including \
             features like dark mode.",
        ),
    ];

    Ok(RuleTable::new(rules))
}
