use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use crate::cli::{GetArgs, InitArgs, ProfileCommand, SetArgs, TemplateArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::OutputMode;
use crate::profile::{ProfileDocument, ProfileKind, fields};
use crate::store::ProfileStore;

#[derive(Debug, Serialize)]
struct ProfileView<'a, P: Serialize> {
    kind: ProfileKind,
    name: &'a str,
    profile: &'a P,
}

#[derive(Debug, Serialize)]
struct DefaultView {
    kind: ProfileKind,
    default: Option<String>,
}

#[derive(Debug, Serialize)]
struct FieldView<'a> {
    kind: ProfileKind,
    name: &'a str,
    key: &'a str,
    value: Value,
}

#[derive(Debug, Serialize)]
struct ChangeView<'a> {
    kind: ProfileKind,
    name: &'a str,
    note: &'a str,
}

pub fn run<P: ProfileDocument>(ctx: &AppContext, command: ProfileCommand) -> AppResult<()> {
    let kind = P::KIND;
    match command {
        ProfileCommand::List => {
            let names = ctx.store.list(kind)?;
            if ctx.verbose > 0 && !names.is_empty() {
                let dir = ctx.paths.category_dir(kind);
                let located = names
                    .iter()
                    .map(|name| format!("{name}\t{}", dir.join(format!("{name}.yaml")).display()))
                    .collect::<Vec<_>>();
                return ctx.output.emit_list("", &located);
            }
            ctx.output.emit_list(&format!("0 {kind} profiles"), &names)
        }
        ProfileCommand::Show(args) => {
            let name = ctx.store.resolve(kind, args.name.as_deref())?;
            let profile: P = ctx.store.load(&name)?;
            if ctx.output.mode() == OutputMode::Text {
                println!("# {kind} profile {name}");
                return ctx.output.emit_document(&profile);
            }
            ctx.output.emit_document(&ProfileView {
                kind,
                name: &name,
                profile: &profile,
            })
        }
        ProfileCommand::Init(args) => init::<P>(ctx, args),
        ProfileCommand::Template(args) => template::<P>(ctx, args),
        ProfileCommand::Get(args) => get::<P>(ctx, args),
        ProfileCommand::Set(args) => set::<P>(ctx, args),
        ProfileCommand::Remove(args) => {
            ctx.store.remove(kind, &args.name)?;
            let text = format!("{kind}: removed {}", args.name);
            emit_change(ctx, kind, &args.name, &text, "removed")
        }
        ProfileCommand::SetDefault(args) => {
            ctx.store.set_default(kind, &args.name)?;
            let text = format!("{kind}: default is now {}", args.name);
            emit_change(ctx, kind, &args.name, &text, "default set")
        }
        ProfileCommand::GetDefault => {
            let default = ctx.store.get_default(kind)?;
            let text = match default.as_deref() {
                Some(name) => format!("{kind}: default is {name}"),
                None => format!("{kind}: no default profile"),
            };
            ctx.output.emit(&text, &DefaultView { kind, default })
        }
        ProfileCommand::ResetDefault => {
            ctx.store.reset_default(kind)?;
            let text = format!("{kind}: default cleared");
            ctx.output.emit(
                &text,
                &DefaultView {
                    kind,
                    default: None,
                },
            )
        }
    }
}

fn init<P: ProfileDocument>(ctx: &AppContext, args: InitArgs) -> AppResult<()> {
    let kind = P::KIND;
    if ctx.store.exists(kind, &args.name)? && !args.force {
        return Err(AppError::AlreadyExists(format!(
            "{kind} profile `{}` (use --force to replace it)",
            args.name
        )));
    }

    ctx.store.save(&args.name, &P::default())?;
    let text = format!("{kind}: created {}", args.name);
    emit_change(ctx, kind, &args.name, &text, "created")
}

fn template<P: ProfileDocument>(ctx: &AppContext, args: TemplateArgs) -> AppResult<()> {
    write_template::<P>(&args.path, args.force)?;
    let path = args.path.display().to_string();
    let text = format!("{}: template written to {path}", P::KIND);
    emit_change(ctx, P::KIND, &path, &text, "template written")
}

fn write_template<P: ProfileDocument>(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::AlreadyExists(format!(
            "{} (use --force to replace it)",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_yaml::to_string(&P::default())?)?;
    Ok(())
}

fn get<P: ProfileDocument>(ctx: &AppContext, args: GetArgs) -> AppResult<()> {
    let name = ctx.store.resolve(P::KIND, Some(&args.name))?;
    let profile: P = ctx.store.load(&name)?;
    let value = fields::get(&profile, &args.key)?;

    let text = fields::render(&value)?;
    ctx.output.emit(
        &text,
        &FieldView {
            kind: P::KIND,
            name: &name,
            key: &args.key,
            value,
        },
    )
}

fn set<P: ProfileDocument>(ctx: &AppContext, args: SetArgs) -> AppResult<()> {
    let name = ctx.store.resolve(P::KIND, Some(&args.name))?;
    let profile: P = ctx.store.load(&name)?;
    let updated = fields::set(&profile, &args.key, &args.value)?;
    ctx.store.save(&name, &updated)?;

    let value = fields::get(&updated, &args.key)?;
    let text = format!("{}: {name} {} = {}", P::KIND, args.key, fields::render(&value)?);
    ctx.output.emit(
        &text,
        &FieldView {
            kind: P::KIND,
            name: &name,
            key: &args.key,
            value,
        },
    )
}

fn emit_change(
    ctx: &AppContext,
    kind: ProfileKind,
    name: &str,
    text: &str,
    note: &str,
) -> AppResult<()> {
    ctx.output.emit(text, &ChangeView { kind, name, note })
}
