use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vic_config::{Config, ConfigManager};
use vic_core::{ChatMessage, OnboardingRecord, StyleProfile, ThreadRandom, STYLE_INTERESTS};
use vic_observability::{LogManager, LoggingConfig};
use vic_persona::Persona;
use vic_store::{Credential, JsonFileStore, StateStore};
use vic_stylist::{select_files, ChatSession, Recommendations, Stylist};

#[derive(Parser)]
#[command(name = "vic")]
#[command(about = "Vic, your personal style advisor")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Config file path
    #[arg(long, env = "VIC_CONFIG", default_value = "~/.vic/config.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze outfit photos and save the resulting style profile
    Analyze {
        /// Image files to analyze
        paths: Vec<PathBuf>,
        /// Analyze every image in a folder instead
        #[arg(long, conflicts_with = "paths")]
        folder: Option<PathBuf>,
    },
    /// Start an interactive chat with Vic
    Chat,
    /// Send a single message
    Send {
        message: String,
    },
    /// Ask Vic about an outfit photo (file path or https URL)
    Outfit {
        image: String,
    },
    /// Outfit recommendations based on your chats and profile
    Recommend,
    /// Style profile commands
    Profile(ProfileArgs),
    /// API key commands
    Key(KeyArgs),
    /// Sign up for Vic
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        instagram: String,
        /// Style interest id (repeatable): minimalist, streetwear, professional, bohemian, modern, vintage
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
    /// Configuration commands
    Config(ConfigArgs),
}

#[derive(Args, Clone)]
struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommands,
}

#[derive(Subcommand, Clone)]
enum ProfileCommands {
    /// Show the saved style profile
    Show,
    /// Forget the style profile and chat transcript
    Clear,
}

#[derive(Args, Clone)]
struct KeyArgs {
    #[command(subcommand)]
    command: KeyCommands,
}

#[derive(Subcommand, Clone)]
enum KeyCommands {
    /// Store an OpenAI API key
    Set { key: String },
    /// Remove the stored API key
    Clear,
    /// Show whether a key is available
    Status,
}

#[derive(Args, Clone)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Get a config value
    Get {
        /// Dotted key (e.g. llm.model, photos.max_files)
        key: String,
    },
    /// Set a config value
    Set {
        /// Dotted key (e.g. llm.model, photos.max_files)
        key: String,
        value: String,
    },
    /// Write the default config
    Init {
        /// Overwrite an existing config
        #[arg(long, default_value = "false")]
        force: bool,
    },
    /// Print the current config
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = vic_config::expand_tilde(&cli.config).unwrap_or_else(|| PathBuf::from(&cli.config));
    if cli.debug {
        eprintln!("{}", format!("[DEBUG] Config path: {:?}", config_path).dimmed());
    }

    let command = match cli.command {
        Commands::Config(args) => return handle_config(args, &config_path).await,
        command => command,
    };

    let manager = ConfigManager::load(&config_path)
        .await
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    let config = manager.snapshot().await;
    let _logs = init_logging(&config, cli.debug).await?;

    let store = open_store(&config, cli.debug)?;

    match command {
        Commands::Profile(args) => handle_profile(args, store.as_ref()).await,
        Commands::Key(args) => handle_key(args, store.as_ref(), &config).await,
        command => {
            let stylist = Stylist::connect(config, store, Arc::new(ThreadRandom)).await?;
            if cli.debug {
                eprintln!("{}", format!("[DEBUG] Online: {}", stylist.is_online()).dimmed());
            }
            run(command, &stylist).await
        }
    }
}

async fn init_logging(config: &Config, debug: bool) -> anyhow::Result<LogManager> {
    let mut logging = LoggingConfig::from_vic(&config.logging)?;
    if debug {
        logging = logging.with_log_level("debug");
    }
    Ok(LogManager::new(&logging).await?)
}

fn open_store(config: &Config, debug: bool) -> anyhow::Result<Arc<dyn StateStore>> {
    let root = vic_config::expand_tilde(&config.storage.path)
        .with_context(|| format!("Cannot resolve storage path {}", config.storage.path))?;
    if debug {
        eprintln!("{}", format!("[DEBUG] State dir: {:?}", root).dimmed());
    }
    Ok(Arc::new(JsonFileStore::new(root)))
}

async fn run(command: Commands, stylist: &Stylist) -> anyhow::Result<()> {
    match command {
        Commands::Analyze { paths, folder } => {
            let count_hint = folder
                .as_ref()
                .map(|dir| format!("photos in {:?}", dir))
                .unwrap_or_else(|| format!("{} photo(s)", paths.len()));
            println!("{}", format!("🔍 Vic is studying {}...", count_hint).cyan());
            let profile = match folder {
                Some(dir) => stylist.analyze_folder(&dir).await?,
                None => stylist.analyze_files(&paths).await?,
            };
            print_profile(&profile);
        }
        Commands::Chat => run_interactive_chat(stylist).await?,
        Commands::Send { message } => {
            let session = stylist.open_session().await?;
            if let Some(reply) = session.send(&message).await? {
                print_reply(&reply);
            }
        }
        Commands::Outfit { image } => {
            let session = stylist.open_session().await?;
            let image = resolve_image(&image).await?;
            if let Some(reply) = session.send_image(image).await? {
                print_reply(&reply);
            }
        }
        Commands::Recommend => {
            let recommendations = stylist.recommend().await?;
            print_recommendations(&recommendations);
        }
        Commands::Signup {
            name,
            email,
            instagram,
            interests,
        } => {
            if let Some(unknown) = interests
                .iter()
                .find(|id| !STYLE_INTERESTS.iter().any(|(known, _)| known == id))
            {
                anyhow::bail!("Unknown style interest: {}", unknown);
            }
            let record = OnboardingRecord::new(name, email, instagram, interests);
            let tracked = stylist.complete_onboarding(record).await?;
            println!("{}", "✅ Welcome to Vic!".green());
            // Let the webhook finish before the process exits
            if !tracked.await.unwrap_or(false) {
                tracing::debug!("signup not reported to analytics");
            }
        }
        Commands::Profile(_) | Commands::Key(_) | Commands::Config(_) => {}
    }
    Ok(())
}

/// Local files become data URLs; http(s) URLs pass through
async fn resolve_image(image: &str) -> anyhow::Result<String> {
    if image.starts_with("https://") || image.starts_with("http://") || image.starts_with("data:") {
        return Ok(image.to_string());
    }
    let mut images = select_files(&[PathBuf::from(image)], 1).await?;
    images.pop().context("No files selected")
}

async fn run_interactive_chat(stylist: &Stylist) -> anyhow::Result<()> {
    let session = stylist.open_session().await?;

    println!("{}", "👗 Vic".cyan().bold());
    if !session.is_online() {
        println!("{}", "Offline mode: set an API key with `vic key set` for full conversations".dimmed());
    }
    println!("{}", "Type 'exit' to leave, '/photo <path>' to share an outfit, '/reset' to start over".dimmed());
    println!();

    println!("{} {}", "Vic:".green().bold(), stylist.greeting().await?);
    if session.messages().len() <= 1 {
        println!();
        for suggestion in Persona::quick_suggestions() {
            println!("  {}", format!("• {}", suggestion).dimmed());
        }
    }
    println!();

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        match chat_step(&session, &input).await {
            ChatStep::Exit => {
                println!("{}", "👋 Until next time.".cyan());
                break;
            }
            ChatStep::Skip => continue,
            ChatStep::Notice(text) => {
                println!("{}", text.dimmed());
                continue;
            }
            ChatStep::Reply(reply) => print_reply(&reply),
            ChatStep::Failed(message) => println!("{}", format!("❌ {}", message).red()),
        }
        println!();
    }

    Ok(())
}

/// What one line typed into the interactive chat produced
#[derive(Debug)]
enum ChatStep {
    Exit,
    Skip,
    Notice(String),
    Reply(ChatMessage),
    Failed(String),
}

async fn chat_step(session: &ChatSession, input: &str) -> ChatStep {
    let input = input.trim();
    if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
        return ChatStep::Exit;
    }
    if input.is_empty() {
        return ChatStep::Skip;
    }

    if let Some(path) = input.strip_prefix("/photo ") {
        return match resolve_image(path.trim()).await {
            Ok(image) => reply_step(session.send_image(image).await),
            Err(e) => ChatStep::Failed(e.to_string()),
        };
    }
    if input == "/reset" {
        return match session.reset().await {
            Ok(()) => ChatStep::Notice("🧹 Conversation cleared".to_string()),
            Err(e) => ChatStep::Failed(format!("Error: {}", e)),
        };
    }
    reply_step(session.send(input).await)
}

fn reply_step(result: vic_stylist::Result<Option<ChatMessage>>) -> ChatStep {
    match result {
        Ok(Some(reply)) => ChatStep::Reply(reply),
        Ok(None) => ChatStep::Skip,
        Err(e) => ChatStep::Failed(format!("Error: {}", e)),
    }
}

async fn handle_profile(args: ProfileArgs, store: &dyn StateStore) -> anyhow::Result<()> {
    match args.command {
        ProfileCommands::Show => match store.load_profile().await? {
            Some(profile) => print_profile(&profile),
            None => println!("{}", "No style profile yet. Run `vic analyze` with a few outfit photos.".yellow()),
        },
        ProfileCommands::Clear => {
            store.clear_profile().await?;
            store.clear_history().await?;
            println!("{}", "✅ Profile and chat history cleared".green());
        }
    }
    Ok(())
}

async fn handle_key(args: KeyArgs, store: &dyn StateStore, config: &Config) -> anyhow::Result<()> {
    match args.command {
        KeyCommands::Set { key } => {
            let credential = Credential::new(&key).context("API key is empty")?;
            store.save_credential(&credential).await?;
            println!("{}", format!("✅ Saved API key {}", credential.masked()).green());
        }
        KeyCommands::Clear => {
            store.clear_credential().await?;
            println!("{}", "✅ API key removed".green());
        }
        KeyCommands::Status => match vic_stylist::resolve_credential(store, &config.llm.api_key_env).await? {
            Some(credential) => println!("{}", format!("🔑 Using API key {}", credential.masked()).green()),
            None => println!(
                "{}",
                format!("⚠️  No API key stored and {} is unset; Vic runs offline", config.llm.api_key_env).yellow()
            ),
        },
    }
    Ok(())
}

async fn handle_config(args: ConfigArgs, config_path: &Path) -> anyhow::Result<()> {
    match args.command {
        ConfigCommands::Get { key } => {
            let manager = ConfigManager::load(config_path).await?;
            match manager.snapshot().await.get_value(&key) {
                Some(value) => println!("{}", format!("{} = {}", key, value).green()),
                None => {
                    println!("{}", format!("❌ Key not found: {}", key).red());
                    std::process::exit(1);
                }
            }
        }
        ConfigCommands::Set { key, value } => {
            let manager = ConfigManager::load(config_path).await?;
            manager.update(|config| config.set_value(&key, &value)).await?;
            println!("{}", format!("✅ Set {} = {}", key, value).green());
        }
        ConfigCommands::Init { force } => {
            if config_path.exists() && !force {
                println!("{}", format!("⚠️  Config already exists at {:?}", config_path).yellow());
                println!("{}", "Use --force to overwrite".dimmed());
                return Ok(());
            }

            vic_config::init_vic_dirs().await?;
            let manager = ConfigManager::new(Config::default(), config_path.to_path_buf());
            manager.save().await?;

            println!("{}", format!("✅ Config initialized at {:?}", config_path).green());
            println!("{}", "You can edit this file to customize your settings".dimmed());
        }
        ConfigCommands::Show => {
            let manager = ConfigManager::load(config_path).await?;
            println!("{}", "📋 Current Configuration:".cyan().bold());
            println!();
            println!("{}", serde_json::to_string_pretty(&manager.snapshot().await)?);
        }
    }
    Ok(())
}

fn print_reply(reply: &ChatMessage) {
    if reply.is_error {
        println!("{} {}", "Vic:".red().bold(), reply.content.red());
    } else {
        println!("{} {}", "Vic:".green().bold(), reply.content);
    }
}

fn print_profile(profile: &StyleProfile) {
    println!("{}", "✨ Your Style Profile".cyan().bold());
    println!("{} {}", "Styles:".bold(), profile.top_styles.join(", "));
    println!("{} {}", "Signatures:".bold(), profile.top_tags.join(", "));
    if let Some(traits) = &profile.aesthetic_traits {
        println!("{} {}", "Traits:".bold(), traits.join(", "));
    }
    if let Some(lifestyle) = &profile.lifestyle {
        println!("{} {}", "Lifestyle:".bold(), lifestyle);
    }
    if let Some(luxury) = &profile.luxury_profile {
        println!("{} {}", "Investment:".bold(), luxury);
    }
    println!();
    println!("{}", profile.summary.italic());
}

fn print_recommendations(recommendations: &Recommendations) {
    if !recommendations.summary.is_empty() {
        println!("{}", recommendations.summary.italic());
        println!();
    }
    for (i, outfit) in recommendations.outfits.iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{}.", i + 1).dimmed(),
            outfit.title.cyan().bold(),
            format!("({}, {})", outfit.occasion, outfit.price_range).dimmed()
        );
        if !outfit.description.is_empty() {
            println!("   {}", outfit.description);
        }
        if !outfit.items.is_empty() {
            println!("   {}", outfit.items.join(" · "));
        }
        for link in &outfit.shopping_links {
            println!("   {} {}", format!("🛍  {}", link.item).green(), link.url.dimmed());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use vic_config::LlmConfig;
    use vic_core::{Conversation, FixedRandom};
    use vic_store::{MemoryStore, StateKey, StoreError, StoreResult};
    use vic_stylist::Advisor;

    /// Reads and writes work; deleting always fails
    struct UndeletableStore(MemoryStore);

    #[async_trait]
    impl StateStore for UndeletableStore {
        async fn read_raw(&self, key: StateKey) -> StoreResult<Option<String>> {
            self.0.read_raw(key).await
        }

        async fn write_raw(&self, key: StateKey, contents: String) -> StoreResult<()> {
            self.0.write_raw(key, contents).await
        }

        async fn remove(&self, _key: StateKey) -> StoreResult<()> {
            Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read-only state dir")))
        }
    }

    fn session(store: Arc<dyn StateStore>) -> ChatSession {
        let persona = Persona::new(Arc::new(FixedRandom(0))).unwrap();
        let advisor = Arc::new(Advisor::new(None, Arc::new(persona), &LlmConfig::default()));
        ChatSession::new(advisor, store, None, Conversation::new())
    }

    #[tokio::test]
    async fn test_reset_failure_keeps_chat_going() {
        let session = session(Arc::new(UndeletableStore(MemoryStore::new())));

        let step = chat_step(&session, "/reset").await;
        assert!(matches!(&step, ChatStep::Failed(message) if message.contains("read-only state dir")));

        let step = chat_step(&session, "hello").await;
        assert!(matches!(step, ChatStep::Reply(_)));
    }

    #[tokio::test]
    async fn test_chat_steps() {
        let session = session(Arc::new(MemoryStore::new()));

        assert!(matches!(chat_step(&session, "  QUIT ").await, ChatStep::Exit));
        assert!(matches!(chat_step(&session, "   ").await, ChatStep::Skip));
        assert!(matches!(chat_step(&session, "/reset").await, ChatStep::Notice(_)));
        assert!(matches!(
            chat_step(&session, "/photo /no/such/look.jpg").await,
            ChatStep::Failed(_)
        ));

        match chat_step(&session, "hello").await {
            ChatStep::Reply(reply) => assert!(reply.content.starts_with("Hello! Lovely to hear from you.")),
            other => panic!("unexpected step: {:?}", other),
        }
    }
}
