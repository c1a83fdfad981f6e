use std::rc::Rc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use postboard::follow::FollowState;
use postboard::pages::{MediaPage, ProfilePage};
use postboard::{config, templates, ApiClient, ReqwestTransport, SharedDocument};

#[derive(Parser)]
#[command(name = "postboard", about = "Drive the posts web app widgets against a live server")]
struct Cli {
    /// Server base URL; defaults to POSTBOARD_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the media page feed
    Feed,
    /// Render a user's profile feed
    Profile { user_id: String },
    /// Submit a new post and render the card it produces
    Post { content: String },
    /// Toggle the follow relationship with a user
    Follow {
        user_id: String,
        /// The viewer already follows this user
        #[arg(long)]
        following: bool,
    },
    /// Open the edit profile page
    EditProfile,
}

fn print_html(document: &SharedDocument) {
    let doc = document.borrow();
    println!("{}", doc.to_html(doc.body()));
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url.unwrap_or_else(config::base_url);
    let api = Rc::new(ApiClient::new(ReqwestTransport::new(&base_url)?));

    match cli.command {
        Command::Feed => {
            let document = templates::media_page(&format!("{}/media", base_url)).shared();
            let page = MediaPage::mount(api, document.clone())?;
            let count = page.load().await;
            print_html(&document);
            eprintln!("{} posts", count);
        }
        Command::Profile { user_id } => {
            let location = format!("{}{}", base_url, config::profile_href(&user_id));
            let document = templates::profile_page(&location, None).shared();
            let page = ProfilePage::mount(api, document.clone())?;
            let count = page.load().await;
            print_html(&document);
            eprintln!("{} posts", count);
        }
        Command::Post { content } => {
            let document = templates::media_page(&format!("{}/media", base_url)).shared();
            let page = MediaPage::mount(api, document.clone())?;
            page.composer.on_input(&content);
            match page.composer.submit().await {
                Some(post) => {
                    print_html(&document);
                    eprintln!("created post {}", post.id);
                }
                None => anyhow::bail!("post was not created"),
            }
        }
        Command::Follow { user_id, following } => {
            let state = if following {
                FollowState::Following
            } else {
                FollowState::NotFollowing
            };
            let location = format!("{}{}", base_url, config::profile_href(&user_id));
            let document = templates::profile_page(&location, Some(state)).shared();
            let page = ProfilePage::mount(api, document.clone())?;
            let control = page
                .follow
                .ok_or_else(|| anyhow::anyhow!("profile page has no follow button"))?;
            let now = control.click().await;
            println!("{}", now.label());
        }
        Command::EditProfile => {
            let document = templates::media_page(&format!("{}/media", base_url)).shared();
            let page = MediaPage::mount(api, document.clone())?;
            let link = page
                .edit_profile
                .ok_or_else(|| anyhow::anyhow!("media page has no edit profile link"))?;
            if link.click().await {
                println!("{}", document.borrow().location());
            } else {
                let doc = document.borrow();
                anyhow::bail!("alert: {}", doc.alerts().join("; "));
            }
        }
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
