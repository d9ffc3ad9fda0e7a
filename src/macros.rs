/// Builds the shared `reqwest::Client` with the crate's user agent.
#[macro_export]
macro_rules! client {
    () => {{
        reqwest::Client::builder()
            .user_agent($crate::USER_AGENT)
            .build()?
    }};
}
