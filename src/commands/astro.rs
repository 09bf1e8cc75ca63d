use serde::Serialize;

use crate::astro::{self, AstroReference};
use crate::cli::{AstroCommand, AstroCreateArgs};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::profile::{EquipmentProfile, ObservatoryProfile, ProfileKind, SettingsProfile};
use crate::store::ProfileStore;

#[derive(Debug, Serialize)]
struct ReferenceView<'a> {
    name: &'a str,
    reference: &'a AstroReference,
    note: &'a str,
}

#[derive(Debug, Serialize)]
struct PartsView<'a> {
    equipment: &'a EquipmentProfile,
    observatory: &'a ObservatoryProfile,
    settings: &'a SettingsProfile,
}

pub fn run(ctx: &AppContext, command: AstroCommand) -> AppResult<()> {
    match command {
        AstroCommand::List => {
            let names = astro::list(&ctx.paths)?;
            ctx.output.emit_list("0 astroprofiles", &names)
        }
        AstroCommand::Show(args) => {
            let profile = astro::load(&ctx.store, &args.name)?;
            if ctx.output.mode() == OutputMode::Text {
                println!(
                    "# astroprofile {} (equipment: {}, observatory: {}, settings: {})",
                    profile.name,
                    profile.reference.equipment,
                    profile.reference.observatory,
                    profile.reference.settings
                );
                return ctx.output.emit_document(&PartsView {
                    equipment: &profile.equipment,
                    observatory: &profile.observatory,
                    settings: &profile.settings,
                });
            }
            ctx.output.emit_document(&profile)
        }
        AstroCommand::Create(args) => create(ctx, args),
        AstroCommand::Remove(args) => {
            let reference = astro::read_reference(&ctx.paths, &args.name)?;
            astro::remove(&ctx.paths, &args.name)?;
            let text = format!("astro: removed {}", args.name);
            ctx.output.emit(
                &text,
                &ReferenceView {
                    name: &args.name,
                    reference: &reference,
                    note: "removed",
                },
            )
        }
    }
}

fn create(ctx: &AppContext, args: AstroCreateArgs) -> AppResult<()> {
    let reference = AstroReference {
        equipment: args.equipment,
        observatory: args.observatory,
        settings: args.settings,
    };

    // Names are stored as given so `default` keeps following the marker.
    for kind in ProfileKind::ALL {
        let requested = reference.name_for(kind);
        match ctx.store.resolve(kind, Some(requested)) {
            Ok(name) => {
                if !ctx.store.exists(kind, &name)? {
                    tracing::warn!(%kind, %name, "astroprofile names a missing profile");
                }
            }
            Err(err) => tracing::warn!(%kind, %err, "astroprofile names an unresolved profile"),
        }
    }

    astro::create_reference(&ctx.paths, &args.name, &reference, args.overwrite)?;
    let text = format!(
        "astro: {} -> equipment {}, observatory {}, settings {}",
        args.name, reference.equipment, reference.observatory, reference.settings
    );
    ctx.output.emit(
        &text,
        &ReferenceView {
            name: &args.name,
            reference: &reference,
            note: "created",
        },
    )
}
