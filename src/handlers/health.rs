pub const HEALTH_MESSAGE: &str = "Gym-Tracker API is up and running";

pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}
