use crate::{
    commands::Commands,
    error::{CliError, Result as CliResult},
    module_commands::ModuleCommands,
    session_commands::SessionCommands,
    session_report::{IssuedToken, LogoutReport, SessionReport},
    token_commands::{DEFAULT_BASE_URL, DEFAULT_TTL_SECS, TokenCommands},
};

use ecs_config::SessionConfig;
use ecs_modules::SimulationInputs;
use ecs_session::{
    Browser, Clock, FederatedUser, GateOptions, IdentityRecord, KeyValueStorage,
    LocalFederatedAuth, MemoryBrowser, PageUrl, SessionGate, SessionStore, TokenClaims,
    encode_token,
};

use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Executes parsed commands against one identity store.
pub struct CommandRunner {
    session: SessionConfig,
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
}

impl CommandRunner {
    pub fn new(
        session: SessionConfig,
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            session,
            storage,
            clock,
        }
    }

    /// Run `command` and return its JSON output.
    pub fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Session { action } => match action {
                SessionCommands::Resolve {
                    url,
                    federated_user,
                } => to_json(&self.resolve(&url, federated_user)?),
                SessionCommands::Show => to_json(&self.store().read()),
                SessionCommands::Logout { url } => {
                    to_json(&self.logout(url.as_deref().unwrap_or(DEFAULT_BASE_URL))?)
                }
            },

            Commands::Token { action } => match action {
                TokenCommands::Issue {
                    uid,
                    email,
                    name,
                    year_of_study,
                    role,
                    admin,
                    shell_domain,
                    micro_app_domain,
                    ttl_secs,
                    exp,
                    base_url,
                } => {
                    let record = IdentityRecord {
                        uid,
                        email,
                        name,
                        year_of_study,
                        role,
                        is_admin: admin,
                        shell_domain,
                        micro_app_domain,
                    };
                    let exp = exp.unwrap_or_else(|| {
                        self.clock
                            .now()
                            .saturating_add(ttl_secs.unwrap_or(DEFAULT_TTL_SECS))
                    });
                    to_json(&issue_token(&record, exp, &base_url)?)
                }
            },

            Commands::Modules { action } => match action {
                ModuleCommands::List => to_json(ecs_modules::catalog()),
                ModuleCommands::Show { module } => {
                    let found = ecs_modules::find_module(&module)
                        .ok_or_else(|| CliError::unknown_module(&module))?;
                    to_json(found)
                }
            },

            Commands::Simulate {
                module,
                simulator,
                inputs,
            } => {
                if ecs_modules::find_module(&module).is_none() {
                    return Err(CliError::unknown_module(module));
                }
                let found = ecs_modules::find_simulator(&module, &simulator)
                    .ok_or_else(|| CliError::unknown_simulator(&module, &simulator))?;

                let outcome = found.run(&parse_inputs(&inputs)?)?;
                to_json(&outcome)
            }
        }
    }

    fn store(&self) -> SessionStore {
        SessionStore::new(Arc::clone(&self.storage), self.session.storage_key.as_str())
    }

    fn gate(&self, browser: Arc<dyn Browser>) -> SessionGate {
        SessionGate::new(
            self.store(),
            browser,
            Arc::clone(&self.clock),
            GateOptions {
                fallback_on_invalid_token: self.session.fallback_on_invalid_token,
                default_shell_origin: self.session.default_shell_origin.clone(),
            },
        )
    }

    fn resolve(&self, url: &str, federated_user: Option<String>) -> CliResult<SessionReport> {
        let browser = Arc::new(MemoryBrowser::open(url)?);
        let mut gate = self.gate(browser.clone());

        let provider = LocalFederatedAuth::new();
        if let Some(uid) = federated_user {
            provider.sign_in(FederatedUser {
                uid,
                email: None,
                display_name: None,
            });
        }
        gate.attach_federated(&provider);

        gate.resolve()?;

        let signals = gate.signals();
        Ok(SessionReport {
            state: gate.state().name(),
            source: gate.source(),
            identity: gate.identity().cloned(),
            federated_active: signals.federated_active,
            has_access: signals.has_access(),
            url: browser.current_url().to_string(),
        })
    }

    fn logout(&self, url: &str) -> CliResult<LogoutReport> {
        let mut gate = self.gate(Arc::new(MemoryBrowser::open(url)?));

        gate.resolve()?;
        let redirect = gate.logout()?;

        Ok(LogoutReport { redirect })
    }
}

/// Launch URL for `record`: `base_url` plus `token` and `sso=true`.
pub fn issue_token(record: &IdentityRecord, exp: i64, base_url: &str) -> CliResult<IssuedToken> {
    let token = encode_token(&TokenClaims::for_record(record, exp))?;
    let url = PageUrl::parse(base_url)?
        .with_param("token", &token)
        .with_param("sso", "true");

    debug!("Issued token for {} expiring at {exp}", record.uid);
    Ok(IssuedToken {
        token,
        url: url.to_string(),
    })
}

/// Split repeated `key=value` arguments. A later key overrides an earlier one.
#[track_caller]
pub fn parse_inputs(pairs: &[String]) -> CliResult<SimulationInputs> {
    let mut inputs = SimulationInputs::new();

    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            CliError::invalid_argument(format!("expected KEY=VALUE, got '{pair}'"))
        })?;
        if key.trim().is_empty() {
            return Err(CliError::invalid_argument(format!(
                "missing key in '{pair}'"
            )));
        }
        inputs.insert(key.trim(), value);
    }

    Ok(inputs)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
