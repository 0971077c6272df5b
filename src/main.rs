use anyhow::Result;
use dotenv::dotenv;
use mobile_signon::application::sign_in::SignInFlow;
use mobile_signon::application::sign_up::SignUpFlow;
use mobile_signon::application::submit::SubmitOutcome;
use mobile_signon::domain::ports::ScreenName;
use mobile_signon::infrastructure::config::AppConfig;
use mobile_signon::infrastructure::http::HttpApiClient;
use mobile_signon::infrastructure::logging::init_logging;
use mobile_signon::presentation::alerts::ConsoleNotifier;
use mobile_signon::presentation::form::FormController;
use mobile_signon::presentation::navigator::ScreenStack;
use mobile_signon::presentation::sign_in::SignInScreen;
use mobile_signon::presentation::sign_up::SignUpScreen;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logging();
    info!("Logging initialized");

    let config = AppConfig::from_env()?;
    info!(api_base_url = %config.api_base_url, "Configuration loaded");

    let api = Arc::new(HttpApiClient::new(&config)?);
    let navigator = Arc::new(ScreenStack::new(ScreenName::SignIn));
    let notifier = Arc::new(ConsoleNotifier);

    let sign_in_flow = Arc::new(SignInFlow::new(api.clone(), notifier.clone()));
    let sign_up_flow = Arc::new(SignUpFlow::new(api, navigator.clone(), notifier));

    let mut sign_in = SignInScreen::new(sign_in_flow, navigator.clone());
    let mut sign_up = SignUpScreen::new(sign_up_flow, navigator.clone());

    info!("Starting console driver");
    loop {
        match navigator.current() {
            ScreenName::SignIn => {
                println!("== Sign in ==");
                read_fields(sign_in.form_mut())?;
                match read_action("[s]ubmit  [c]reate account  [q]uit")?.as_str() {
                    "c" => sign_in.create_account(),
                    "q" => break,
                    _ => {
                        let outcome = sign_in.submit().await;
                        print_field_errors(sign_in.form());
                        if matches!(outcome, SubmitOutcome::Completed) {
                            println!("Signed in.");
                            break;
                        }
                    }
                }
            }
            ScreenName::SignUp => {
                println!("== Create your account ==");
                read_fields(sign_up.form_mut())?;
                match read_action("[s]ubmit  [b]ack to logon  [q]uit")?.as_str() {
                    "b" => sign_up.back_to_logon(),
                    "q" => break,
                    _ => {
                        sign_up.submit().await;
                        print_field_errors(sign_up.form());
                    }
                }
            }
        }
    }

    info!("Console driver finished");
    Ok(())
}

fn read_fields(form: &mut FormController) -> Result<()> {
    let names: Vec<_> = form
        .fields()
        .iter()
        .map(|h| (h.name(), h.placeholder()))
        .collect();
    for (name, placeholder) in names {
        let value = read_line(&format!("{placeholder}: "))?;
        form.set_value(name, value);
    }
    Ok(())
}

fn read_action(menu: &str) -> Result<String> {
    Ok(read_line(&format!("{menu} > "))?.to_lowercase())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_field_errors(form: &FormController) {
    for handle in form.fields() {
        if let Some(error) = handle.error() {
            println!("  ! {}: {error}", handle.placeholder());
        }
    }
}
