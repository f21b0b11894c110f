//! `roster show` command implementation.

use std::path::PathBuf;

use clap::Args;

use roster_config::{CliSettings, Config};
use roster_views::{
    GradeView, GroupView, HomeView, PageKind, PageParams, ViewModel, locale, render,
};

use crate::commands::load_bundle;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Page to render: home, grade, or group.
    page: String,

    /// Grade key (the `g` query parameter).
    #[arg(short, long)]
    grade: Option<String>,

    /// Group id (the `group` query parameter).
    #[arg(long)]
    group: Option<String>,

    /// Print the view model as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Path to configuration file (default: auto-discover roster.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the config.json URL.
    #[arg(long)]
    config_url: Option<String>,

    /// Override the data.json URL.
    #[arg(long)]
    data_url: Option<String>,

    /// Disable the document cache for this run.
    #[arg(long)]
    no_cache: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, loading, or rendering fails.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            config_url: self.config_url,
            data_url: self.data_url,
            cache_enabled: self.no_cache.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Resolve the page kind before touching the network; an unsupported
        // marker fails the same way regardless of the documents
        let kind = match PageKind::from_marker(&self.page) {
            Ok(kind) => kind,
            Err(err) => {
                output.error(locale::view_error_message(&err));
                return Err(err.into());
            }
        };

        let bundle = load_bundle(&config, version, &output)?;

        let params = PageParams {
            grade: self.grade,
            group: self.group,
        };

        let view = match render(kind, &params, &bundle.site, &bundle.roster) {
            Ok(view) => view,
            Err(err) => {
                output.error(locale::view_error_message(&err));
                return Err(err.into());
            }
        };

        if self.json {
            let json = serde_json::to_string_pretty(&view)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            output.data(&json);
        } else {
            print_view(&output, &view);
        }

        Ok(())
    }
}

/// Apply a view model to the terminal.
fn print_view(output: &Output, view: &ViewModel) {
    match view {
        ViewModel::Home(home) => print_home(output, home),
        ViewModel::Grade(grade) => print_grade(output, grade),
        ViewModel::Group(group) => print_group(output, group),
    }

    for href in view.prefetch() {
        output.hint(&format!("prefetch: {href}"));
    }
}

fn print_home(output: &Output, home: &HomeView) {
    output.highlight(&home.title);
    output.info(&home.subtitle);
    output.info(&home.managed_by);
    output.separator();
    for grade in &home.grades {
        output.info(&format!(
            "{} — {} תלמידים ({})",
            grade.label, grade.size, grade.href
        ));
    }
    output.separator();
    output.success(&format!("סך הכל בבית הספר: {}", home.school_total));
}

fn print_grade(output: &Output, grade: &GradeView) {
    output.highlight(&grade.label);
    output.separator();
    for group in &grade.groups {
        output.info(&format!(
            "{} — {} — {} תלמידים ({})",
            group.name, group.teacher, group.size, group.href
        ));
    }
    output.separator();
    output.success(&format!("סך הכל בשכבה: {}", grade.grade_total));
    output.info(&format!("חזרה: {}", grade.back_href));
}

fn print_group(output: &Output, group: &GroupView) {
    output.highlight(&format!("{} · {}", group.grade_label, group.name));
    output.info(&group.teacher);
    output.separator();
    for row in &group.rows {
        output.info(&format!("{:>3}. {}", row.number, row.name));
    }
    output.separator();
    output.success(&format!("סך הכל בהקבצה: {}", group.group_total));
    output.info(&format!("חזרה: {}", group.back_href));
}
