use crate::cli::LoginArgs;
use crate::context::CliContext;
use crate::output;

pub async fn login(ctx: &mut CliContext, args: LoginArgs) -> anyhow::Result<()> {
    if args.identifier.trim().is_empty() || args.secret.trim().is_empty() {
        anyhow::bail!("Please fill in all fields.");
    }

    let accepted = ctx
        .session
        .login(&args.identifier, &args.secret, args.remember)
        .await?;
    if !accepted {
        anyhow::bail!("Invalid credentials. Please try again.");
    }

    output::output_success(serde_json::json!({
        "isAuthenticated": true,
        "remembered": args.remember,
    }));
    Ok(())
}

pub async fn logout(ctx: &mut CliContext) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    output::output_success(serde_json::json!({ "isAuthenticated": false }));
    Ok(())
}

pub fn status(ctx: &CliContext) -> anyhow::Result<()> {
    let auth = ctx.session.state();
    output::output_success(serde_json::json!({
        "isAuthenticated": auth.is_authenticated,
        "isLoading": auth.is_loading,
        "dataDir": ctx.data_dir().display().to_string(),
        "tasks": ctx.board.state().tasks.len(),
        "activityEntries": ctx.board.state().activity_log.len(),
    }));
    Ok(())
}
