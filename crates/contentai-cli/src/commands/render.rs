use contentai_application::{CommandOutcome, GenerationOutcome};
use contentai_core::generation::Idea;
use contentai_core::history::HistoryPayload;
use contentai_core::user::User;

pub fn print(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::LoggedIn(user) => println!("Logged in as {}", user.display_name()),
        CommandOutcome::Registered(user) => {
            println!("Account created. Welcome, {}!", user.display_name())
        }
        CommandOutcome::LoggedOut => println!("Logged out"),
        CommandOutcome::CurrentUser(None) => println!("Not logged in"),
        CommandOutcome::CurrentUser(Some(user)) => print_user(user),
        CommandOutcome::Ideas(outcome) => print_generation(outcome, |ideas| {
            for (n, idea) in ideas.iter().enumerate() {
                print_idea(n + 1, idea);
            }
        }),
        CommandOutcome::Script(outcome) => print_generation(outcome, |script| println!("{}", script)),
        CommandOutcome::History(entries) => {
            if entries.is_empty() {
                println!("No history yet");
            }
            for entry in entries {
                println!(
                    "{}  [{}]  {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M"),
                    entry.kind(),
                    entry.payload.summary()
                );
                if let HistoryPayload::Ideas { ideas, .. } = &entry.payload {
                    for idea in ideas {
                        println!("    - {}", idea.title);
                    }
                }
            }
        }
        CommandOutcome::Users(users) => {
            println!("{} user(s)", users.len());
            for user in users {
                println!(
                    "{:>6}  {:<32} {:<8} {}",
                    user.id,
                    user.email,
                    user.plan_label(),
                    if user.is_admin { "admin" } else { "" }
                );
            }
        }
        CommandOutcome::Dashboard(stats) => {
            println!("Users:    {} ({} premium, {} free)", stats.users.total, stats.users.premium, stats.users.free());
            println!("Ideas:    {}", stats.statistics.total_ideas_generated);
            println!("Scripts:  {}", stats.statistics.total_scripts_generated);
            println!("Feedback: {}", stats.statistics.total_feedbacks);
        }
        CommandOutcome::UserUpdated { user_id, user } => match user {
            Some(user) => println!("User {} is now {}", user_id, user.plan_label()),
            None => println!("User {} updated", user_id),
        },
    }
}

fn print_generation<T>(outcome: &GenerationOutcome<T>, body: impl Fn(&T)) {
    match outcome {
        GenerationOutcome::Generated(content) => body(content),
        GenerationOutcome::LoginRequired { message } => {
            println!("{}", message);
            println!("Run `contentai login <email> --password <password>` to keep generating.");
        }
        GenerationOutcome::Fallback { content, reason } => {
            eprintln!("Generation unavailable ({}). Showing sample content instead.", reason);
            body(content);
        }
    }
}

fn print_idea(n: usize, idea: &Idea) {
    println!("{}. {}", n, idea.title);
    println!("   {}", idea.description);
    if !idea.hashtags.is_empty() {
        println!("   {}", idea.hashtags);
    }
}

fn print_user(user: &User) {
    println!("{} <{}>", user.display_name(), user.email);
    println!("Plan:   {}", user.plan_label());
    if user.is_admin {
        println!("Role:   admin");
    }
    println!("Since:  {}", user.created_at.format("%Y-%m-%d"));
}
