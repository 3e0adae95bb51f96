/// A line typed on the MyPage command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Command {
    Subscribe { region: String, sub_region: String },
    Unsubscribe { region: String, sub_region: String },
    Notify(bool),
    Reload,
    Logout,
    DeleteAccount,
    Help,
}

pub(super) const HELP: &str =
    "sub <region> <sub-region> | unsub <region> <sub-region> | notify on|off | reload | logout | delete-account";

pub(super) fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim().trim_start_matches('/');
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("empty command".to_string());
    };
    let rest: Vec<&str> = words.collect();

    match (head, rest.as_slice()) {
        ("sub" | "subscribe", [region, sub_region]) => Ok(Command::Subscribe {
            region: region.to_string(),
            sub_region: sub_region.to_string(),
        }),
        ("unsub" | "unsubscribe", [region, sub_region]) => Ok(Command::Unsubscribe {
            region: region.to_string(),
            sub_region: sub_region.to_string(),
        }),
        ("sub" | "subscribe" | "unsub" | "unsubscribe", _) => {
            Err(format!("usage: {} <region> <sub-region>", head))
        }
        ("notify", ["on"]) => Ok(Command::Notify(true)),
        ("notify", ["off"]) => Ok(Command::Notify(false)),
        ("notify", _) => Err("usage: notify on|off".to_string()),
        ("reload", []) => Ok(Command::Reload),
        ("logout", []) => Ok(Command::Logout),
        ("delete-account", []) => Ok(Command::DeleteAccount),
        ("help" | "?", _) => Ok(Command::Help),
        _ => Err(format!("unknown command: {} (try `help`)", head)),
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/commands_tests.rs"]
mod tests;
