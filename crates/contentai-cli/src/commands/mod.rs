pub mod render;

use contentai_application::Command;
use contentai_core::admin::UserFilter;

use crate::{AdminAction, Commands};

/// Turns parsed arguments into a dispatcher command.
pub fn build(command: Commands) -> Command {
    match command {
        Commands::Login { email, password } => Command::Login { email, password },
        Commands::Register {
            email,
            name,
            password,
            confirm,
        } => Command::Register {
            email,
            password,
            name,
            confirm_password: confirm,
        },
        Commands::Logout => Command::Logout,
        Commands::Whoami => Command::WhoAmI,
        Commands::Ideas {
            niche,
            audience,
            count,
        } => Command::GenerateIdeas {
            niche,
            audience,
            count,
        },
        Commands::Script { idea } => Command::GenerateScript { idea },
        Commands::History { kind, limit } => Command::History { kind, limit },
        Commands::Admin { action } => match action {
            AdminAction::Users {
                query,
                plan,
                admins,
            } => Command::AdminUsers {
                filter: UserFilter {
                    query,
                    plan,
                    admins_only: admins,
                },
            },
            AdminAction::Dashboard => Command::AdminDashboard,
            AdminAction::SetPremium { user_id, revoke } => Command::AdminSetPremium {
                user_id,
                premium: !revoke,
            },
        },
    }
}
