//! `stdkit [ADDRESS]...`: check email addresses and print their parts.

use std::io::Write;
use std::process::ExitCode;

use stdkit::config::Configuration;
use stdkit::{Email, Error, mask, telemetry};

fn main() -> ExitCode {
    let (config, config_error) = Configuration::default()
        .path(std::env::var("CONFIG_PATH").unwrap_or_default())
        .read();

    if let Err(err) = telemetry::setup_logging(&config.log) {
        eprintln!("failed to initialize logging: {err}");
    }

    if let Some(err) = config_error {
        tracing::warn!(error = %err, "cannot read configuration file, using defaults");
    }

    let addresses: Vec<String> = std::env::args().skip(1).collect();
    if addresses.is_empty() {
        tracing::warn!("no address given");
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout().lock();
    let mut failed = 0usize;

    for address in addresses {
        match Email::parse(address) {
            Ok(email) => {
                let local = if config.output.mask_local_part {
                    mask::mask_not_first_last(email.local_part())
                } else {
                    email.local_part().to_owned()
                };

                if let Err(err) = writeln!(stdout, "{local}\t{}", email.domain_part()) {
                    let err = Error::wrap(err, "main", "print", &[email.as_str()]);
                    tracing::error!(error = %err, "cannot write to stdout");
                    return ExitCode::FAILURE;
                }
            },
            Err(err) => {
                failed += 1;
                tracing::warn!(error = %err, "invalid email address");
            },
        }
    }

    tracing::debug!(failed, "all addresses checked");

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
