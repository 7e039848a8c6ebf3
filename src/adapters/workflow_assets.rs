use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};
use std::path::Path;

use crate::domain::AppError;

static WORKFLOW_TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/workflows");

const TEMPLATE_SUFFIX: &str = ".j2";

/// A rendered workflow file, keyed by its repository-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowFile {
    pub path: String,
    pub content: String,
}

/// Render the GitHub Actions workflow that runs `mergelog update` on merge.
pub fn load_workflow_files(runs_on: &str) -> Result<Vec<WorkflowFile>, AppError> {
    if runs_on.trim().is_empty() {
        return Err(AppError::Validation("runs-on label must not be empty".to_string()));
    }

    let context = context! {
        runs_on => runs_on.trim(),
        version => env!("CARGO_PKG_VERSION"),
    };

    let mut files = Vec::new();
    collect_templates(&WORKFLOW_TEMPLATES_DIR, WORKFLOW_TEMPLATES_DIR.path(), &context, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    if files.is_empty() {
        return Err(AppError::InternalError("Workflow templates are missing".to_string()));
    }
    Ok(files)
}

fn collect_templates(
    dir: &Dir,
    base_path: &Path,
    context: &minijinja::Value,
    files: &mut Vec<WorkflowFile>,
) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let content = file.contents_utf8().ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Workflow template is not UTF-8: {}",
                        file.path().display()
                    ))
                })?;
                let relative = file.path().strip_prefix(base_path).unwrap_or(file.path());
                let relative = relative.to_string_lossy();
                let path = relative.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(&relative).to_string();

                let rendered = render_template(content, context, &path)?;
                files.push(WorkflowFile { path, content: rendered });
            }
            DirEntry::Dir(subdir) => collect_templates(subdir, base_path, context, files)?,
        }
    }
    Ok(())
}

fn render_template(
    content: &str,
    context: &minijinja::Value,
    path: &str,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    env.add_template(path, content).map_err(|err| AppError::template_error(path, err))?;
    env.get_template(path)
        .and_then(|template| template.render(context))
        .map_err(|err| AppError::template_error(path, err))
}
