use ansi_term::{Colour, Style};
use lazy_static::lazy_static;
use std::fmt::{Display, Formatter};
use std::path::Path;

lazy_static! {
    pub static ref RED: Style = Style::new().fg(Colour::Red);
    pub static ref GREEN: Style = Style::new().fg(Colour::Green);
    pub static ref BLUE: Style = Style::new().fg(Colour::Blue);
    pub static ref RED_BOLD: Style = Style::new().fg(Colour::Red).bold();
    pub static ref GREEN_BOLD: Style = Style::new().fg(Colour::Green).bold();
    pub static ref PURPLE_BOLD: Style = Style::new().fg(Colour::Purple).bold();
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleText {
    pub content: String,
    pub style: Option<&'static ansi_term::Style>,
}

impl StyleText {
    pub fn to_plain_text(&self) -> &str {
        self.content.as_str()
    }
}

impl Display for StyleText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            &self
                .style
                .map(|style| style.paint(&self.content).to_string())
                .unwrap_or(self.content.clone()),
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleMessage(pub Vec<StyleText>);

impl StyleMessage {
    pub fn new() -> Self {
        StyleMessage::default()
    }

    pub fn plain_text(mut self, content: impl AsRef<str>) -> Self {
        self.0.push(StyleText {
            content: content.as_ref().to_string(),
            style: None,
        });
        self
    }

    pub fn styled_text(
        mut self,
        content: impl AsRef<str>,
        style: &'static ansi_term::Style,
    ) -> Self {
        self.0.push(StyleText {
            content: content.as_ref().to_string(),
            style: Some(style),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(mut self, other: StyleMessage) -> Self {
        other.0.into_iter().for_each(|m| self.0.push(m));
        self
    }

    pub fn to_plain_text(&self) -> String {
        self.0
            .iter()
            .map(|st| st.to_plain_text())
            .collect::<Vec<_>>()
            .join("")
    }
}

// format message
impl StyleMessage {
    pub(crate) fn ops_start(ops: impl AsRef<str>, path: impl AsRef<Path>) -> Self {
        StyleMessage::new()
            .plain_text(format!("{} in ", ops.as_ref()))
            .styled_text(path.as_ref().display().to_string(), &PURPLE_BOLD)
    }

    pub(crate) fn ops_errors(prefix: impl AsRef<str>, count: usize) -> Result<Self, Self> {
        match count {
            0 => Ok(StyleMessage::new()
                .plain_text(format!("{} finished! 0 error(s).", prefix.as_ref()))),
            _ => Err(StyleMessage::new()
                .plain_text(format!("{} finished! ", prefix.as_ref()))
                .styled_text(count.to_string(), &RED_BOLD)
                .plain_text(" error(s).")),
        }
    }

    pub(crate) fn repo_end(is_success: bool) -> Self {
        let (sign, style): (&str, &Style) = match is_success {
            true => ("√", &GREEN_BOLD),
            false => ("x", &RED_BOLD),
        };
        StyleMessage::new().styled_text(sign, style)
    }

    pub fn repo_status(name: impl AsRef<str>, status: impl AsRef<str>, is_success: bool) -> Self {
        let style: &Style = match is_success {
            true => &GREEN,
            false => &RED,
        };
        StyleMessage::repo_end(is_success)
            .plain_text(" ")
            .styled_text(name.as_ref(), &PURPLE_BOLD)
            .plain_text(": ")
            .styled_text(status.as_ref(), style)
    }

    pub(crate) fn git_error(name: impl AsRef<str>, error: &anyhow::Error) -> Self {
        let err_msg = error
            .chain()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("");

        StyleMessage::new()
            .styled_text(name.as_ref(), &PURPLE_BOLD)
            .plain_text(" ")
            .styled_text(err_msg.trim(), &RED)
    }

    pub(crate) fn git_cloning(url: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .plain_text("clone from ")
            .styled_text(url.as_ref(), &BLUE)
            .plain_text("...")
    }

    pub(crate) fn git_updating(branch: Option<&str>) -> Self {
        match branch {
            Some(branch) => StyleMessage::new()
                .plain_text("update ")
                .styled_text(branch, &BLUE)
                .plain_text("..."),
            None => StyleMessage::new().plain_text("update..."),
        }
    }

    pub(crate) fn repo_found(name: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .plain_text("found repo: ")
            .styled_text(name.as_ref(), &PURPLE_BOLD)
    }

    pub(crate) fn no_repos_matched(org: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .plain_text("no repositories in ")
            .styled_text(org.as_ref(), &PURPLE_BOLD)
            .plain_text(" matched the given terms.")
    }

    pub(crate) fn auth_failed(org: impl AsRef<str>, missing_token: bool) -> Self {
        let msg = StyleMessage::new()
            .plain_text("authentication to ")
            .styled_text(org.as_ref(), &PURPLE_BOLD)
            .plain_text(" failed");

        match missing_token {
            true => msg
                .plain_text(", supply a token with ")
                .styled_text("--token", &PURPLE_BOLD)
                .plain_text(" or ")
                .styled_text("~/.github-token", &PURPLE_BOLD)
                .plain_text("!"),
            false => msg.plain_text(", check the supplied token!"),
        }
    }

    pub(crate) fn org_not_found(org: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .plain_text("organization ")
            .styled_text(org.as_ref(), &PURPLE_BOLD)
            .plain_text(" not found.")
    }
}

impl Display for StyleMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            &self
                .0
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

impl<T> From<T> for StyleMessage
where
    T: AsRef<str>,
{
    fn from(value: T) -> Self {
        StyleMessage::new().plain_text(value.as_ref())
    }
}
