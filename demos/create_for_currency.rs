use anyhow::Context;
use braintree_rust::{
    apis::{auth::Credentials, merchant_accounts::CreateForCurrencyRequestBuilder},
    client::Environment,
    BraintreeClient,
};
use dialoguer::{console::style, theme::ColorfulTheme, Input};

#[derive(serde::Deserialize, Debug)]
struct Config {
    merchant_id: String,
    public_key: String,
    private_key: String,
    environment: Option<String>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("BRAINTREE"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;
    let environment = config
        .environment
        .as_deref()
        .unwrap_or("sandbox")
        .parse::<Environment>()?;

    // Setup Braintree client
    let bt = BraintreeClient::builder(Credentials::ApiKeys {
        merchant_id: config.merchant_id,
        public_key: config.public_key,
        private_key: config.private_key.into(),
    })
    .with_environment(environment)
    .build();

    let currency: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Currency (ISO 4217)")
        .with_initial_text("EUR")
        .interact_text()?;
    let id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Id of the new merchant account (leave empty to generate one)")
        .allow_empty(true)
        .interact_text()?;

    let mut request = CreateForCurrencyRequestBuilder::default();
    request.currency(currency.to_uppercase());
    if !id.is_empty() {
        request.id(id);
    }

    let res = bt
        .merchant_accounts
        .create_for_currency(&request.build()?)
        .await?;

    let dot = style("·".to_string()).for_stderr().black().bright();
    match res.merchant_account {
        Some(merchant_account) if res.success => println!(
            "{} {} {:#?}",
            dot,
            style("Created merchant account").bold().green(),
            merchant_account
        ),
        _ => {
            println!("{} {}", dot, style("Request rejected").bold().red());
            if let Some(errors) = res.errors {
                println!("{} {}", dot, errors);
            }
            if !res.other.is_empty() {
                println!("{} {}", dot, serde_json::Value::Object(res.other));
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
