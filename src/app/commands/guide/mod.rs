//! Guided configuration: visit every module in order, collect and render
//! what the operator enables, and rebuild the manifest from the result.

mod collect;

use crate::app::AppContext;
use crate::app::prompt::PromptLoop;
use crate::app::services::{ArtifactRenderer, ManifestAssembler, ModuleStateStore, RenderOutcome};
use crate::domain::{
    AppError, ArtifactState, InboundFeedSettings, Module, ModuleState, OutboundFeedSettings,
    RetentionSettings, ServerSettings,
};
use crate::ports::{AssetSource, ConfigStore, Console, HostResolver, NoticeLevel};

pub use collect::Collect;

/// What happened to one module during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    pub module: Module,
    pub state: ModuleState,
    /// Present when fields were collected and rendered this run.
    pub render: Option<RenderOutcome>,
}

/// Outcome of a complete guided run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub modules: Vec<ModuleReport>,
    pub manifest_path: String,
}

impl RunSummary {
    pub fn state_of(&self, module: Module) -> Option<ModuleState> {
        self.modules.iter().find(|report| report.module == module).map(|report| report.state)
    }

    /// Modules whose fragments are in the manifest, in manifest order.
    pub fn active_modules(&self) -> Vec<Module> {
        self.modules.iter().filter(|r| r.state.is_active()).map(|r| r.module).collect()
    }
}

enum Decision {
    /// Collect fields and render.
    Configure { force: bool },
    /// Artifact exists and stays as is.
    Keep,
    /// Not enabled.
    Skip,
}

/// Run the wizard over every module.
pub fn execute<S, A, C, R>(
    ctx: &AppContext<S, A>,
    prompts: &mut PromptLoop<'_, C, R>,
) -> Result<RunSummary, AppError>
where
    S: ConfigStore,
    A: AssetSource,
    C: Console + ?Sized,
    R: HostResolver + ?Sized,
{
    ctx.store().create_dir_all(ctx.sysconfig_dir())?;

    let states = ModuleStateStore::new(ctx.store(), ctx.sysconfig_dir());
    let renderer = ArtifactRenderer::new(ctx.store(), ctx.assets());
    let assembler = ManifestAssembler::new(ctx.store(), ctx.assets());
    let manifest_path = ctx.manifest_path();

    let mut reports = Vec::with_capacity(Module::ALL.len());
    for module in Module::ALL {
        let artifact_path = states.artifact_path(module);
        let existing = states.state(module);
        tracing::debug!(module = module.name(), ?existing, "checked module state");

        let (state, render) = match decide(module, existing, prompts)? {
            Decision::Configure { force } => {
                let outcome = configure(module, &renderer, &artifact_path, force, prompts)?;
                match &outcome {
                    RenderOutcome::Written(path) => {
                        prompts.notice(NoticeLevel::Success, &format!("Wrote {}", path));
                        (ModuleState::PresentReconfigured, Some(outcome))
                    }
                    RenderOutcome::Skipped(path) => {
                        prompts.notice(
                            NoticeLevel::Warning,
                            &format!("Not writing {}, it already exists", path),
                        );
                        (ModuleState::PresentUnchanged, Some(outcome))
                    }
                }
            }
            Decision::Keep => (ModuleState::PresentUnchanged, None),
            Decision::Skip => (ModuleState::Absent, None),
        };

        if state.is_active() {
            assembler.append(&module.fragment_path(), manifest_path, module.is_mandatory())?;
        }

        reports.push(ModuleReport { module, state, render });
    }

    prompts.notice(NoticeLevel::Success, &format!("Wrote {}", manifest_path));
    Ok(RunSummary { modules: reports, manifest_path: manifest_path.to_string() })
}

fn decide<C, R>(
    module: Module,
    existing: ArtifactState,
    prompts: &mut PromptLoop<'_, C, R>,
) -> Result<Decision, AppError>
where
    C: Console + ?Sized,
    R: HostResolver + ?Sized,
{
    match existing {
        ArtifactState::Present => {
            if prompts.confirm(&module.reconfigure_prompt(), false)? {
                Ok(Decision::Configure { force: true })
            } else {
                Ok(Decision::Keep)
            }
        }
        ArtifactState::Absent if module.is_mandatory() => Ok(Decision::Configure { force: false }),
        ArtifactState::Absent => {
            if prompts.confirm(&module.enable_prompt(), false)? {
                Ok(Decision::Configure { force: false })
            } else {
                Ok(Decision::Skip)
            }
        }
    }
}

fn configure<S, A, C, R>(
    module: Module,
    renderer: &ArtifactRenderer<'_, S, A>,
    output_path: &str,
    force: bool,
    prompts: &mut PromptLoop<'_, C, R>,
) -> Result<RenderOutcome, AppError>
where
    S: ConfigStore,
    A: AssetSource,
    C: Console + ?Sized,
    R: HostResolver + ?Sized,
{
    match module {
        Module::ChnServer => {
            collect_and_render::<ServerSettings, _, _, _, _>(renderer, output_path, force, prompts)
        }
        Module::Mnemosyne => {
            collect_and_render::<RetentionSettings, _, _, _, _>(renderer, output_path, force, prompts)
        }
        Module::HpfeedsCif => {
            collect_and_render::<OutboundFeedSettings, _, _, _, _>(renderer, output_path, force, prompts)
        }
        Module::CifHpfeeds => {
            collect_and_render::<InboundFeedSettings, _, _, _, _>(renderer, output_path, force, prompts)
        }
    }
}

fn collect_and_render<T, S, A, C, R>(
    renderer: &ArtifactRenderer<'_, S, A>,
    output_path: &str,
    force: bool,
    prompts: &mut PromptLoop<'_, C, R>,
) -> Result<RenderOutcome, AppError>
where
    T: Collect,
    S: ConfigStore,
    A: AssetSource,
    C: Console + ?Sized,
    R: HostResolver + ?Sized,
{
    let settings = T::collect(prompts)?;
    renderer.render(&T::MODULE.template_path(), output_path, &settings, force)
}
