//! Terminal capabilities and output routing for a command run

use std::io::IsTerminal;

/// Environment variables whose presence marks a CI runner
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
    "TEAMCITY_VERSION",
    "TF_BUILD",
];

/// What the current terminal can do, and where status text should go
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    /// An operator can answer prompts (stdin and stdout are terminals)
    interactive: bool,
    /// stderr is a terminal; spinners and bars redraw there
    stderr_tty: bool,
    /// stdout is reserved for machine-readable output
    machine_output: bool,
    /// Whether --yes flag was passed (auto-approve prompts)
    auto_yes: bool,
}

impl UiContext {
    /// Detect the current environment
    pub fn detect() -> Self {
        let ci = in_ci();
        Self {
            interactive: !ci && std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
            stderr_tty: !ci && std::io::stderr().is_terminal(),
            machine_output: false,
            auto_yes: false,
        }
    }

    /// Plain context: no prompts, no redrawing output
    pub fn non_interactive() -> Self {
        Self::default()
    }

    /// Set auto-yes mode (bypass prompts with defaults)
    pub fn with_auto_yes(mut self, yes: bool) -> Self {
        self.auto_yes = yes;
        self
    }

    /// Reserve stdout for a machine-readable report
    pub fn with_machine_output(mut self, machine: bool) -> Self {
        self.machine_output = machine;
        self
    }

    /// Check if an operator can answer prompts
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Check if prompts should be auto-approved
    pub fn auto_yes(&self) -> bool {
        self.auto_yes
    }

    /// Spinners and progress bars need a prompting session and a redrawable stderr
    pub fn use_fancy_output(&self) -> bool {
        self.interactive && self.stderr_tty
    }

    /// Status lines, prompts and diagnostics must stay off stdout
    pub fn status_to_stderr(&self) -> bool {
        self.machine_output
    }
}

fn in_ci() -> bool {
    CI_VARS.iter().any(|var| std::env::var_os(var).is_some())
}
