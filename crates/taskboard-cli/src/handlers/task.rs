use crate::cli::{TaskAction, TaskAddArgs, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{FieldUpdate, TaskDraft, TaskUpdate};

pub async fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    ctx.require_auth()?;
    match action {
        TaskAction::Add(args) => {
            let task = ctx.board.add_task(build_draft(args)).await?;
            output::output_success(&task);
        }
        TaskAction::Get { id } => {
            let task = ctx.board.task(&id)?;
            output::output_success(task);
        }
        TaskAction::Update(args) => {
            let id = args.id.clone();
            let task = ctx.board.update_task(&id, build_update(args)).await?;
            output::output_success(&task);
        }
        TaskAction::Move { id, status } => {
            let task = ctx.board.move_task(&id, status).await?;
            output::output_success(&task);
        }
        TaskAction::Delete { id } => {
            let task = ctx.board.delete_task(&id).await?;
            output::output_success(serde_json::json!({ "deleted": task.id }));
        }
    }
    Ok(())
}

fn build_draft(args: TaskAddArgs) -> TaskDraft {
    TaskDraft {
        title: args.title,
        description: args.description,
        priority: args.priority,
        due_date: args.due_date,
        tags: (!args.tags.is_empty()).then_some(args.tags),
    }
}

fn build_update(args: TaskUpdateArgs) -> TaskUpdate {
    TaskUpdate {
        title: args.title,
        description: args.description,
        priority: args.priority,
        due_date: match (args.clear_due_date, args.due_date) {
            (true, _) => FieldUpdate::Clear,
            (false, Some(date)) => FieldUpdate::Set(date),
            (false, None) => FieldUpdate::NoChange,
        },
        tags: args.tags,
        status: None,
    }
}
