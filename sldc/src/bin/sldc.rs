fn main() -> anyhow::Result<()> {
    sldc::cli::run_cli()
}
