use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    shipwright completions --shell bash > ~/.bash_completion.d/shipwright\n\n\
                  Generate zsh completions:\n    shipwright completions --shell zsh > ~/.zfunc/_shipwright\n\n\
                  Generate fish completions:\n    shipwright completions --shell fish > ~/.config/fish/completions/shipwright.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: Shell,
}
