mod command;
mod record;

fn main() -> anyhow::Result<()> {
    command::run()
}
