use crate::cli::{BoardAction, ViewArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_domain::ViewQuery;

pub async fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        BoardAction::View(args) => {
            let query = build_query(args);
            let view = ctx.board.view(&query);
            output::output_success(serde_json::json!({
                "count": view.len(),
                "columns": view,
            }));
        }
        BoardAction::Reset { yes } => {
            if !yes {
                anyhow::bail!(
                    "Resetting deletes all tasks and the activity log. Pass --yes to confirm."
                );
            }
            ctx.board.reset().await?;
            output::output_success(ctx.board.state());
        }
        BoardAction::Drop { id, target } => {
            ctx.board.task(&id)?;
            let moved = ctx.board.drop_task(&id, target.as_deref()).await?;
            output::output_success(serde_json::json!({
                "id": id,
                "moved": moved.is_some(),
                "status": ctx.board.task(&id)?.status,
            }));
        }
    }
    Ok(())
}

fn build_query(args: ViewArgs) -> ViewQuery {
    ViewQuery::new()
        .with_search(args.search)
        .with_priority(args.priority)
        .sorted_by_date(args.sort_by_date)
}
