use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mpbrun completions bash > ~/.bash_completion.d/mpbrun\n\n\
                  Generate zsh completions:\n    mpbrun completions zsh > ~/.zfunc/_mpbrun\n\n\
                  Generate fish completions:\n    mpbrun completions fish > ~/.config/fish/completions/mpbrun.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
