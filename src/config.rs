#[derive(clap::Parser, Clone)]
pub struct AppConfig {
    #[clap(long, env, default_value = "dev")]
    pub stage: Stage,

    // App configs
    #[clap(long, env, default_value_t = 8080)]
    pub app_application_port: u16,

    #[clap(long, env, default_value = "127.0.0.1")]
    pub app_application_host: String,
}

#[derive(clap::ValueEnum, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Stage {
    Dev,
    Prod,
}
