/// Make.com webhook that receives submitted leads. A deployment-time
/// value, never user input; overridable at build time so staging and
/// test builds can point it at a stub endpoint.
const DEFAULT_WEBHOOK_URL: &str = "https://hook.eu1.make.com/oygdnn8sm5wcqvpbz0vjujhvofwt5ngl";

pub fn get_webhook_url() -> String {
    option_env!("NORTHLINE_WEBHOOK_URL")
        .or(option_env!("TRUNK_PUBLIC_WEBHOOK_URL"))
        .unwrap_or(DEFAULT_WEBHOOK_URL)
        .to_string()
}
