use anyhow::Context;
use braintree_rust::{
    apis::{
        auth::Credentials,
        merchant_accounts::{
            FundingDestination, FundingRequest, IndividualRequest, MerchantAccount,
            MerchantAccountRequestBuilder,
        },
    },
    client::Environment,
    BraintreeClient,
};
use dialoguer::{console::style, theme::ColorfulTheme, Confirm, Input, Select};
use futures::TryStreamExt;

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

fn describe(m: &MerchantAccount) -> String {
    format!(
        "Account {} ({}, {}){}",
        m.id,
        m.currency_iso_code.as_deref().unwrap_or("no currency"),
        m.status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        if m.default { " [default]" } else { "" }
    )
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

    let dot = style("·".to_string()).for_stderr().black().bright();

    // Stream all merchant accounts, one page at a time
    let mut merchant_accounts = Vec::new();
    let mut stream = bt.merchant_accounts.list_all();
    while let Some(merchant_account) = stream.try_next().await? {
        println!("{} {}", dot, describe(&merchant_account));
        merchant_accounts.push(merchant_account);
    }
    anyhow::ensure!(!merchant_accounts.is_empty(), "No merchant accounts found");

    // Let the user select one account
    let merchant_account_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a merchant account")
        .items(&merchant_accounts.iter().map(describe).collect::<Vec<_>>())
        .default(0)
        .interact()?;
    let merchant_account = bt
        .merchant_accounts
        .find(&merchant_accounts[merchant_account_index].id)
        .await?;

    println!(
        "{} Merchant account details: {:#?}",
        dot,
        style(&merchant_account).bold().cyan()
    );

    let create = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Do you want to create a sub merchant under this account?")
        .default(false)
        .interact()?;
    if !create {
        return Ok(());
    }

    let first_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("First name")
        .interact_text()?;
    let last_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Last name")
        .interact_text()?;
    let email: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .interact_text()?;
    let destination = [
        FundingDestination::Email,
        FundingDestination::MobilePhone,
        FundingDestination::Bank,
    ][Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Funding destination")
        .items(&["Email", "Mobile phone", "Bank"])
        .default(0)
        .interact()?];

    let funding = match destination {
        FundingDestination::Email | FundingDestination::Unknown => FundingRequest {
            destination: Some(destination),
            email: Some(email.clone()),
            ..Default::default()
        },
        FundingDestination::MobilePhone => FundingRequest {
            destination: Some(destination),
            mobile_phone: Some(
                Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Mobile phone")
                    .interact_text()?,
            ),
            ..Default::default()
        },
        FundingDestination::Bank => FundingRequest {
            destination: Some(destination),
            account_number: Some(
                Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Account number")
                    .interact_text()?,
            ),
            routing_number: Some(
                Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Routing number")
                    .interact_text()?,
            ),
            ..Default::default()
        },
    };

    let request = MerchantAccountRequestBuilder::default()
        .master_merchant_account_id(merchant_account.id.clone())
        .tos_accepted(true)
        .individual(IndividualRequest {
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: Some(email),
            ..Default::default()
        })
        .funding(funding)
        .build()?;

    match bt.merchant_accounts.create(&request).await {
        Ok(created) => println!(
            "{} {} {}",
            dot,
            style("Created merchant account").bold().green(),
            describe(&created)
        ),
        Err(braintree_rust::Error::ValidationError(e)) => {
            println!("{} {}", dot, style(e).bold().red())
        }
        Err(e) => return Err(e.into()),
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
