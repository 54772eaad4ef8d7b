#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let prefix = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .next()
            .unwrap_or_else(|| return "".to_string());

        let cmd = SlashCommand { command: prefix };
        if cmd.is_quit() || cmd.is_mode_toggle() || cmd.is_help() {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_mode_toggle(&self) -> bool {
        return ["/m", "/mode"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }
}
