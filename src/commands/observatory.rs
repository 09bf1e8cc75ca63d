use serde::Serialize;

use crate::cli::ObservatoryCommand;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::{ObservatoryProfile, Observer, ProfileDocument};
use crate::store::ProfileStore;

use super::profile;

#[derive(Debug, Serialize)]
struct ObserverView<'a> {
    name: &'a str,
    observer: Option<Observer>,
}

pub fn run(ctx: &AppContext, command: ObservatoryCommand) -> AppResult<()> {
    match command {
        ObservatoryCommand::Profile(command) => profile::run::<ObservatoryProfile>(ctx, command),
        ObservatoryCommand::Observer(args) => {
            let name = ctx
                .store
                .resolve(ObservatoryProfile::KIND, args.name.as_deref())?;
            let observatory: ObservatoryProfile = ctx.store.load(&name)?;
            let observer = observatory.observer()?;

            let text = match observer.as_ref() {
                Some(observer) => observer.to_string(),
                None => format!("{name}: location is incomplete"),
            };
            ctx.output.emit(
                &text,
                &ObserverView {
                    name: &name,
                    observer,
                },
            )
        }
    }
}
