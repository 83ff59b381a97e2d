//! Terminal views for the blog API.
//!
//! ```bash
//! blog-client list
//! blog-client show 1
//! blog-client create --title "Hello" --content "My first post"
//! ```

#![warn(clippy::pedantic)]

use blog::{client::PostClient, route::post::model::CreatePostInput, view};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blog-client")]
#[command(about = "Read and write posts through the blog API", long_about = None)]
#[command(version)]
struct Cli {
	/// Base url of the blog API
	#[arg(
		long,
		env = "BLOG_API_URL",
		default_value = "http://127.0.0.1:3000",
		value_name = "URL"
	)]
	api_url: String,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List every post
	List,

	/// Show a single post
	Show {
		/// Id of the post
		#[arg(value_name = "ID")]
		id: i64,
	},

	/// Create a new post
	Create {
		/// Title of the post
		#[arg(short, long)]
		title: String,

		/// Body of the post
		#[arg(short, long)]
		content: String,
	},
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let client = PostClient::new(&cli.api_url);

	let rendered = match cli.command {
		Commands::List => view::list(&client.list().await?),
		Commands::Show { id } => view::detail(&client.get(id).await?),
		Commands::Create { title, content } => {
			view::created(&client.create(&CreatePostInput { title, content }).await?)
		}
	};

	print!("{rendered}");

	Ok(())
}
