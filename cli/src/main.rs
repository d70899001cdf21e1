//! CLI entrypoint for CureNexus
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use nexus_application::{
    ContentSynthesizer, ConversationalQa, DiscoveryParams, NoProgress, ProgressNotifier,
    ProjectCorpus, ProjectDetailSession, ProviderGateway, QaError, QueryIntentExtractor,
    SearchError, SearchProjectsUseCase, SearchSession,
};
use nexus_domain::{Project, ProjectId};
use nexus_infrastructure::{ConfigLoader, GeminiGateway, InMemoryCorpus};
use nexus_presentation::{
    AudienceArg, Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormatter,
    ProgressReporter, SimpleProgress, join_query, preset_question,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Everything a command needs, built once from configuration
struct App {
    gateway: Arc<dyn ProviderGateway>,
    corpus: Arc<InMemoryCorpus>,
    params: DiscoveryParams,
    formatter: Box<dyn OutputFormatter>,
    progress: Box<dyn ProgressNotifier>,
}

impl App {
    fn project(&self, id: &str) -> Result<&Project> {
        self.corpus.get(&ProjectId::new(id)).ok_or_else(|| {
            anyhow!(
                "Unknown project id: {}. Run `cure-nexus projects` to list them.",
                id
            )
        })
    }

    fn detail_session(&self) -> ProjectDetailSession {
        ProjectDetailSession::new(
            Arc::new(ContentSynthesizer::new(
                self.gateway.clone(),
                self.params.clone(),
            )),
            Arc::new(ConversationalQa::new(
                self.gateway.clone(),
                self.params.clone(),
            )),
        )
    }

    async fn search(&self, words: &[String]) -> Result<()> {
        let extractor = QueryIntentExtractor::new(self.gateway.clone(), self.params.clone());
        let session = SearchSession::new(SearchProjectsUseCase::new(
            extractor,
            self.corpus.clone(),
        ));

        let snapshot = match session.submit(&join_query(words), self.progress.as_ref()).await {
            Ok(snapshot) => snapshot,
            Err(SearchError::InvalidInput(e)) if e.is_empty_input() => {
                bail!("A search query is required. Usage: cure-nexus search <QUERY>")
            }
            Err(e) => return Err(e.into()),
        };

        let projects = session.resolve(&snapshot);
        println!("{}", self.formatter.search(&snapshot, &projects));
        Ok(())
    }

    async fn describe(&self, id: &str, audience: AudienceArg, retry: bool) -> Result<()> {
        let project = self.project(id)?;
        let session = self.detail_session();

        let ticket = session.open(project);
        session.set_audience(audience.into());
        if retry {
            session
                .retry_content(&ticket, project, self.progress.as_ref())
                .await;
        } else {
            session
                .load_content(&ticket, project, self.progress.as_ref())
                .await;
        }

        println!("{}", self.formatter.detail(project, &session.view()));
        Ok(())
    }

    async fn ask(&self, id: &str, question: Option<String>, preset: Option<usize>) -> Result<()> {
        let project = self.project(id)?;
        let question = match (question, preset) {
            (Some(question), _) => question,
            (None, Some(number)) => preset_question(number)
                .ok_or_else(|| anyhow!("Preset question must be between 1 and 3"))?
                .to_string(),
            (None, None) => bail!("A question is required. Usage: cure-nexus ask <PROJECT_ID> <QUESTION>"),
        };

        let session = self.detail_session();
        let ticket = session.open(project);
        match session
            .ask(&ticket, project, &question, self.progress.as_ref())
            .await
        {
            Ok(_) => {}
            Err(QaError::UserInputEmpty) => {
                bail!("A question is required. Usage: cure-nexus ask <PROJECT_ID> <QUESTION>")
            }
            Err(e) => return Err(e.into()),
        }

        println!("{}", self.formatter.detail(project, &session.view()));
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    info!("Starting CureNexus (model: {})", config.provider.model);

    // === Dependency Injection ===
    let corpus = Arc::new(
        InMemoryCorpus::from_path(config.catalog.path.as_deref())
            .context("Failed to load project catalog")?,
    );
    let gateway: Arc<dyn ProviderGateway> = Arc::new(GeminiGateway::new(
        config.provider.to_gemini_settings(),
        config.provider.resolve_api_key(),
    )?);

    let formatter: Box<dyn OutputFormatter> = if cli.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(ConsoleFormatter)
    };
    let progress: Box<dyn ProgressNotifier> = if cli.quiet || cli.json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let app = App {
        gateway,
        corpus,
        params: config.provider.to_discovery_params(),
        formatter,
        progress,
    };

    match command {
        Command::Search { query } => app.search(&query).await,
        Command::Describe {
            project_id,
            audience,
            retry,
        } => app.describe(&project_id, audience, retry).await,
        Command::Ask {
            project_id,
            question,
            preset,
        } => app.ask(&project_id, question, preset).await,
        Command::Projects => {
            println!("{}", app.formatter.projects(app.corpus.list()));
            Ok(())
        }
        Command::Suggestions => {
            println!("{}", app.formatter.suggestions());
            Ok(())
        }
    }
}
