//! Itaipu CLI binary.
//!
//! One subcommand per dashboard lens; renders the lens view models as
//! text tables or JSON.

use clap::{Parser, Subcommand};
use itaipu::dashboard::{
    self, BilateralView, CounterpartyView, CreditView, MarketView, NetView, PortfolioView,
    ProductsView,
};
use itaipu::data::DataDirectory;
use itaipu::output::{
    KpiBlock, Report, TextTable, brl, export_series, export_table, month_abbrev, number, percent,
};
use itaipu::risk::CounterpartyScreen;
use itaipu::series::{
    MonthlyPoint, PositionFilter, ProductDimension, RiskMeasure, Submarket, YearSelection,
};
use itaipu::{Datasets, dashboard::LabeledSeries};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "itaipu")]
#[command(about = "Itaipu: energy-portfolio risk dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the exported dataset sheets
    #[arg(long, global = true, default_value = "./data")]
    data_dir: PathBuf,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Also write the lens's chart data to a CSV file
    #[arg(long, global = true, value_name = "PATH")]
    export: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Net positions: volumes, prices, MtM and P&L
    Net {
        /// Filter by energy source description
        #[arg(long)]
        source: Option<String>,

        /// Filter by submarket code (N, NE, SE, S)
        #[arg(long, value_parser = parse_submarket)]
        submarket: Option<Submarket>,

        /// Calendar year, or "Todos" for all years
        #[arg(long, default_value = "Todos", value_parser = parse_year)]
        year: YearSelection,
    },

    /// Portfolio product positions
    Products {
        /// Calendar year, or "Todos" for all years
        #[arg(long, default_value = "Todos", value_parser = parse_year)]
        year: YearSelection,

        /// Decomposition dimension (energy, source or submarket)
        #[arg(long, default_value = "energy", value_parser = parse_dimension)]
        dimension: ProductDimension,

        /// Filter by maturation label
        #[arg(long)]
        maturation: Option<String>,
    },

    /// Product positions of one counterparty
    Counterparty {
        /// Counterparty identifier
        name: String,

        /// Calendar year, or "Todos" for all years
        #[arg(long, default_value = "Todos", value_parser = parse_year)]
        year: YearSelection,
    },

    /// Credit risk of one counterparty
    Credit {
        /// Counterparty identifier
        name: String,

        /// Calendar year, or "Todos" for all years
        #[arg(long, default_value = "Todos", value_parser = parse_year)]
        year: YearSelection,
    },

    /// Screened bilateral credit risk
    Bilateral {
        /// Screen (top-pl, above-pl-limit or above-el-limit)
        #[arg(long, default_value = "top-pl", value_parser = parse_screen)]
        screen: CounterpartyScreen,

        /// Focus counterparty (defaults to the first screened)
        #[arg(long)]
        focus: Option<String>,

        /// Calendar year, or "Todos" for all years
        #[arg(long, default_value = "Todos", value_parser = parse_year)]
        year: YearSelection,
    },

    /// Market risk (VaR/CVaR) decompositions
    Market {
        /// Calendar year, or "Todos" for all years
        #[arg(long, default_value = "Todos", value_parser = parse_year)]
        year: YearSelection,

        /// Risk measure (var or cvar)
        #[arg(long, default_value = "var", value_parser = parse_measure)]
        measure: RiskMeasure,

        /// Decomposition dimension (energy, source or submarket)
        #[arg(long, default_value = "energy", value_parser = parse_dimension)]
        dimension: ProductDimension,
    },

    /// Expected-loss distribution versus the target allocation
    Portfolio,
}

fn parse_year(input: &str) -> Result<YearSelection, String> {
    YearSelection::parse(input).ok_or_else(|| format!("invalid year: {input}"))
}

fn parse_submarket(input: &str) -> Result<Submarket, String> {
    Submarket::from_code(input).ok_or_else(|| format!("invalid submarket code: {input}"))
}

fn parse_measure(input: &str) -> Result<RiskMeasure, String> {
    RiskMeasure::parse(input).ok_or_else(|| format!("invalid risk measure: {input}"))
}

fn parse_screen(input: &str) -> Result<CounterpartyScreen, String> {
    CounterpartyScreen::parse(input).ok_or_else(|| format!("invalid screen: {input}"))
}

fn parse_dimension(input: &str) -> Result<ProductDimension, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "energy" | "energia" => Ok(ProductDimension::Energy),
        "source" | "fonte" => Ok(ProductDimension::Source),
        "submarket" | "submercado" => Ok(ProductDimension::Submarket),
        _ => Err(format!("invalid dimension: {input}")),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let datasets = Datasets::load(&DataDirectory::new(&cli.data_dir)).await?;

    match cli.command {
        Commands::Net {
            source,
            submarket,
            year,
        } => {
            let filter = PositionFilter {
                energy_source: source,
                submarket,
                year: year.specific(),
            };
            let view = dashboard::net::build(&datasets, &filter);
            export_if_requested(cli.export.as_deref(), &net_series(&view))?;
            emit(&cli.format, "net", &view, render_net)
        }
        Commands::Products {
            year,
            dimension,
            maturation,
        } => {
            let view = dashboard::products::build(&datasets, year, dimension, maturation.as_deref());
            export_if_requested(cli.export.as_deref(), &labeled_columns(&view.volumes))?;
            emit(&cli.format, "products", &view, render_products)
        }
        Commands::Counterparty { name, year } => {
            let view = dashboard::counterparty::build(&datasets, &name, year);
            export_if_requested(cli.export.as_deref(), &labeled_columns(&view.volumes))?;
            emit(&cli.format, "counterparty", &view, render_counterparty)
        }
        Commands::Credit { name, year } => {
            let view = dashboard::credit::build(&datasets, &name, year);
            export_if_requested(cli.export.as_deref(), &credit_series(&view))?;
            emit(&cli.format, "credit", &view, render_credit)
        }
        Commands::Bilateral {
            screen,
            focus,
            year,
        } => {
            let view = dashboard::bilateral::build(&datasets, screen, focus.as_deref(), year);
            export_if_requested(cli.export.as_deref(), &bilateral_series(&view))?;
            emit(&cli.format, "bilateral", &view, render_bilateral)
        }
        Commands::Market {
            year,
            measure,
            dimension,
        } => {
            let view = dashboard::market::build(&datasets, year, measure, dimension);
            export_if_requested(cli.export.as_deref(), &market_series(&view))?;
            emit(&cli.format, "market", &view, render_market)
        }
        Commands::Portfolio => {
            let view = dashboard::portfolio::build(&datasets);
            if let Some(path) = &cli.export {
                export_table(path, &portfolio_table(&view))?;
            }
            emit(&cli.format, "portfolio", &view, render_portfolio)
        }
    }
}

fn emit<T: Serialize>(
    format: &str,
    lens: &str,
    view: &T,
    render: impl Fn(&T) -> String,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        "json" => println!("{}", Report::new(lens, view)?.to_json()?),
        "text" => print!("{}", render(view)),
        other => return Err(format!("invalid output format: {other}").into()),
    }
    Ok(())
}

const NO_DATA: &str = "Sem dados para a seleção.\n";

fn month_table(columns: &[(&str, &[MonthlyPoint], usize)]) -> TextTable {
    let mut headers = vec!["Mês".to_string()];
    headers.extend(columns.iter().map(|(label, _, _)| (*label).to_string()));
    let mut table = TextTable::new(headers);
    let months = columns.first().map_or(0, |(_, points, _)| points.len());
    for i in 0..months {
        let mut row = vec![month_abbrev(columns[0].1[i].month).to_string()];
        row.extend(
            columns
                .iter()
                .map(|(_, points, decimals)| number(points[i].value, *decimals)),
        );
        table.push_row(row);
    }
    table
}

fn series_columns(series: &[LabeledSeries], decimals: usize) -> Vec<(&str, &[MonthlyPoint], usize)> {
    series
        .iter()
        .map(|s| (s.label.as_str(), s.points.as_slice(), decimals))
        .collect()
}

fn export_if_requested(
    path: Option<&Path>,
    series: &[(&str, Vec<MonthlyPoint>)],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        export_series(path, series)?;
    }
    Ok(())
}

fn labeled_columns(series: &[LabeledSeries]) -> Vec<(&str, Vec<MonthlyPoint>)> {
    series
        .iter()
        .map(|s| (s.label.as_str(), s.points.clone()))
        .collect()
}

fn net_series(view: &NetView) -> Vec<(&str, Vec<MonthlyPoint>)> {
    vec![
        ("Volume", view.volume.clone()),
        ("Consolidado", view.consolidated_volume.clone()),
        ("Compra", view.buy_price.clone()),
        ("Venda", view.sell_price.clone()),
        ("MtM", view.mtm.clone()),
        ("Resultado", view.profit_loss.clone()),
    ]
}

fn credit_series(view: &CreditView) -> Vec<(&str, Vec<MonthlyPoint>)> {
    vec![
        ("EE", view.ee.clone()),
        ("PFE", view.pfe.clone()),
        ("CVaR", view.cvar.clone()),
        ("EL EE", view.el_ee.clone()),
        ("EL PFE", view.el_pfe.clone()),
        ("EL CVaR", view.el_cvar.clone()),
    ]
}

fn bilateral_series(view: &BilateralView) -> Vec<(&str, Vec<MonthlyPoint>)> {
    let Some(focus) = &view.focus else {
        return Vec::new();
    };
    let mut series = vec![
        ("PFE", focus.pfe.clone()),
        ("Resultado", focus.profit_loss.clone()),
    ];
    series.extend(labeled_columns(&focus.volumes));
    series
}

fn market_series(view: &MarketView) -> Vec<(&str, Vec<MonthlyPoint>)> {
    let mut series = vec![
        ("Total", view.risk_total.clone()),
        (view.dimension.label(), view.risk_dimension.clone()),
        ("Estressado", view.stressed_pl.clone()),
        ("Resultado", view.profit_loss.clone()),
    ];
    series.extend(labeled_columns(&view.volumes));
    series
}

fn render_net(view: &NetView) -> String {
    let mut out = String::new();
    if let Some(kpis) = &view.kpis {
        let mut block = KpiBlock::new("Posição líquida");
        block.push("Volume", format!("{} MWm", number(kpis.net_volume, 1)));
        block.push("MtM", brl(kpis.mtm));
        block.push("Resultado", brl(kpis.profit_loss));
        block.push("Exposição", brl(kpis.face_value));
        block.push("Preço médio compra", format!("R$ {}/MWh", number(kpis.avg_buy_price, 2)));
        block.push("Preço médio venda", format!("R$ {}/MWh", number(kpis.avg_sell_price, 2)));
        out.push_str(&block.to_string());
    } else {
        out.push_str(NO_DATA);
    }
    if !view.volume.is_empty() {
        out.push('\n');
        let table = month_table(&[
            ("Volume", view.volume.as_slice(), 1),
            ("Consolidado", view.consolidated_volume.as_slice(), 1),
            ("Compra", view.buy_price.as_slice(), 2),
            ("Venda", view.sell_price.as_slice(), 2),
            ("MtM", view.mtm.as_slice(), 0),
            ("Resultado", view.profit_loss.as_slice(), 0),
        ]);
        out.push_str(&table.to_string());
    }
    out
}

fn render_products(view: &ProductsView) -> String {
    let mut out = String::new();
    if let Some(kpis) = &view.kpis {
        let mut block = KpiBlock::new(format!("Produtos ({})", view.dimension));
        block.push("Volume", format!("{} MWm", number(kpis.energy_volume, 1)));
        block.push("Exposição", brl(kpis.face_value));
        block.push("MtM", brl(kpis.mtm));
        block.push("Resultado", brl(kpis.profit_loss));
        out.push_str(&block.to_string());
    } else {
        out.push_str(NO_DATA);
    }
    if !view.volumes.is_empty() {
        out.push('\n');
        out.push_str(&month_table(&series_columns(&view.volumes, 1)).to_string());
    }
    out
}

fn render_counterparty(view: &CounterpartyView) -> String {
    let mut out = String::new();
    if let Some(kpis) = &view.kpis {
        let mut block = KpiBlock::new(view.counterparty.clone());
        block.push("Volume energia", format!("{} MWm", number(kpis.energy_volume, 1)));
        block.push("Convencional", format!("{} MWm", number(kpis.con_volume, 1)));
        block.push("Incentivada", format!("{} MWm", number(kpis.source_volume, 1)));
        block.push("Exposição", brl(kpis.face_value));
        block.push("MtM", brl(kpis.mtm));
        block.push("Resultado", brl(kpis.profit_loss));
        out.push_str(&block.to_string());
    } else {
        out.push_str(NO_DATA);
    }
    if !view.volumes.is_empty() {
        out.push('\n');
        out.push_str(&month_table(&series_columns(&view.volumes, 1)).to_string());
    }
    out
}

fn render_credit(view: &CreditView) -> String {
    let mut out = String::new();
    if let Some(exposure) = &view.exposure {
        let mut block = KpiBlock::new(format!("Risco de crédito: {}", view.counterparty));
        block.push("Rating", exposure.rating.clone());
        block.push("EPE", brl(exposure.epe));
        block.push("PFE (ano)", brl(exposure.pfe_year));
        block.push("CVaR (ano)", brl(exposure.cvar_year));
        block.push("EL EPE", brl(exposure.el_epe));
        block.push("EL PFE", brl(exposure.el_pfe_year));
        block.push("EL CVaR", brl(exposure.el_cvar_year));
        block.push("Resultado (ano)", brl(exposure.profit_loss_year));
        block.push("Limite", brl(exposure.profit_loss_limit));
        out.push_str(&block.to_string());
    } else {
        out.push_str(NO_DATA);
    }
    if let Some(positions) = &view.positions {
        let mut block = KpiBlock::new("Posições");
        block.push("Volume", format!("{} MWm", number(positions.net_volume, 1)));
        block.push("Exposição", brl(positions.face_value));
        block.push("MtM", brl(positions.mtm));
        block.push("Resultado", brl(positions.profit_loss));
        out.push('\n');
        out.push_str(&block.to_string());
    }
    if !view.pfe.is_empty() {
        out.push('\n');
        let table = month_table(&[
            ("EE", view.ee.as_slice(), 0),
            ("PFE", view.pfe.as_slice(), 0),
            ("CVaR", view.cvar.as_slice(), 0),
            ("EL EE", view.el_ee.as_slice(), 0),
            ("EL PFE", view.el_pfe.as_slice(), 0),
            ("EL CVaR", view.el_cvar.as_slice(), 0),
        ]);
        out.push_str(&table.to_string());
    }
    out
}

fn render_bilateral(view: &BilateralView) -> String {
    let mut out = String::new();
    let mut table = TextTable::new(["Contraparte", "Rating", "Resultado", "Limite", "EL PFE"]);
    for card in &view.cards {
        table.push_row([
            card.counterparty.clone(),
            card.rating.clone(),
            brl(card.profit_loss_year),
            brl(card.profit_loss_limit),
            brl(card.el_pfe_year),
        ]);
    }
    out.push_str(&format!("Filtro: {}\n", view.screen));
    if view.cards.is_empty() {
        out.push_str(NO_DATA);
    } else {
        out.push_str(&table.to_string());
    }
    if let Some(focus) = &view.focus {
        let mut block = KpiBlock::new(format!("Em foco: {}", focus.counterparty));
        block.push("Rating", focus.exposure.rating.clone());
        block.push("EL PFE", brl(focus.exposure.el_pfe_year));
        block.push("Resultado (ano)", brl(focus.exposure.profit_loss_year));
        block.push("Limite", brl(focus.exposure.profit_loss_limit));
        out.push('\n');
        out.push_str(&block.to_string());
        if !focus.pfe.is_empty() {
            out.push('\n');
            let table = month_table(&[
                ("PFE", focus.pfe.as_slice(), 0),
                ("Resultado", focus.profit_loss.as_slice(), 0),
            ]);
            out.push_str(&table.to_string());
        }
        if !focus.volumes.is_empty() {
            out.push('\n');
            out.push_str(&month_table(&series_columns(&focus.volumes, 1)).to_string());
        }
    }
    out
}

fn render_market(view: &MarketView) -> String {
    let mut out = String::new();
    if let Some(kpis) = &view.kpis {
        let mut block = KpiBlock::new(format!("Risco de mercado ({})", view.measure));
        block.push(view.measure.label(), brl(kpis.risk_total));
        block.push("MtM", brl(kpis.mtm));
        block.push("Exposição", brl(kpis.face_value));
        block.push("Resultado estressado", brl(kpis.stressed_pl));
        block.push("% energia", percent(kpis.pct_energy));
        block.push("% fonte", percent(kpis.pct_source));
        block.push("% submercado", percent(kpis.pct_submarket));
        out.push_str(&block.to_string());
    } else {
        out.push_str(NO_DATA);
    }
    if !view.risk_total.is_empty() {
        out.push('\n');
        let dimension = view.dimension.to_string();
        let mut columns = vec![
            ("Total", view.risk_total.as_slice(), 0),
            (dimension.as_str(), view.risk_dimension.as_slice(), 0),
            ("Estressado", view.stressed_pl.as_slice(), 0),
            ("Resultado", view.profit_loss.as_slice(), 0),
        ];
        columns.extend(series_columns(&view.volumes, 1));
        out.push_str(&month_table(&columns).to_string());
    }
    out
}

fn portfolio_table(view: &PortfolioView) -> TextTable {
    let mut table = TextTable::new([
        "Bucket",
        "EL",
        "Realizado %",
        "PMA",
        "Meta %",
        "Meta PMA",
        "Acima",
    ]);
    for row in &view.distribution.rows {
        table.push_row([
            row.bucket.to_string(),
            number(row.el_sum, 0),
            percent(row.realized_share),
            number(row.realized_pma, 1),
            percent(row.target_share),
            number(row.target_pma, 0),
            if row.over_target { "sim" } else { "" }.to_string(),
        ]);
    }
    table
}

fn render_portfolio(view: &PortfolioView) -> String {
    let mut out = String::new();
    out.push_str(&portfolio_table(view).to_string());
    let mut totals = KpiBlock::new("Totais");
    totals.push("Contrapartes", view.counterparties.to_string());
    totals.push("EL total", number(view.distribution.total_el, 0));
    totals.push("PMA realizado", number(view.distribution.total_pma, 1));
    totals.push("PMA meta", number(view.distribution.target_total_pma, 0));
    out.push('\n');
    out.push_str(&totals.to_string());
    out
}
