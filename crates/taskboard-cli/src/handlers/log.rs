use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &CliContext, limit: Option<usize>, all: bool) -> anyhow::Result<()> {
    ctx.require_auth()?;
    let state = ctx.board.state();
    let entries = match (all, limit) {
        (true, _) => state.activity_log.as_slice(),
        (false, Some(limit)) => state.recent_activity(limit),
        (false, None) => ctx.board.recent_activity(),
    };
    output::output_list(entries.to_vec());
    Ok(())
}
