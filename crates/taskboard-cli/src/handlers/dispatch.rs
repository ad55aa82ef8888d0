use crate::context::CliContext;
use crate::output;
use taskboard_domain::Action;

/// Feed a raw action through the reducer. Unlike the task commands this does
/// no validation, so unknown ids produce the reducer's fallback log labels.
pub async fn handle(ctx: &mut CliContext, raw: &str) -> anyhow::Result<()> {
    ctx.require_auth()?;
    let action = Action::from_json(raw).map_err(|e| anyhow::anyhow!("Invalid action: {}", e))?;
    let kind = action.kind().to_string();
    if matches!(action, Action::Unknown(_)) {
        tracing::warn!("Dispatching unknown action type {}", kind);
    }

    ctx.board.dispatch(action).await?;
    output::output_success(serde_json::json!({
        "dispatched": kind,
        "state": ctx.board.state(),
    }));
    Ok(())
}
