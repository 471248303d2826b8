use clap::Parser;
use fake::{faker::lorem::en::Word, Fake};
use rand::Rng;
use skyline::{
    app::Application,
    config::AppConfig,
    telemetry::{build_telemetry, register_telemetry},
};
use std::sync::LazyLock;

static TELEMETRY: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::stdout);
        register_telemetry(telemetry);
    } else {
        let null_telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::sink);
        register_telemetry(null_telemetry);
    };
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_skyline(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/skyline", &self.address))
            .query(query)
            .send()
            .await
            .expect("failed to execute request")
    }
}

/// A well-formed, random wallet address.
pub fn random_address() -> String {
    let mut rng = rand::thread_rng();

    let tail: String = (0..40)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap())
        .collect();

    format!("0x{}", tail)
}

pub fn random_data() -> String {
    Word().fake()
}

pub async fn spawn_app() -> TestApp {
    // Config setup
    dotenvy::dotenv().ok();

    LazyLock::force(&TELEMETRY);

    // Randomise configuration to ensure test isolation
    let app_config = {
        let mut c = AppConfig::parse();

        // Use a random OS port
        c.app_application_port = 0;

        c
    };

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let app = Application::build(app_config).await.unwrap();

    let test_app = TestApp {
        address: format!("http://localhost:{}", &app.port),
        api_client,
    };

    _ = tokio::spawn(app.run_until_stopped());

    test_app
}
