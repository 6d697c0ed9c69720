use anyhow::Context;
use cotaplan_core::domain::quotation::PlanRecord;
use cotaplan_core::engine::brackets;
use std::io::Read;
use std::path::Path;

/// Reads the semicolon-delimited plan CSV and normalizes it into rows ready
/// for the `planos` table. Currency normalization happens here, once, so the
/// engine never sees PT-BR formatted values.
pub fn load_plans(path: &Path) -> anyhow::Result<Vec<PlanRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open CSV at {}", path.display()))?;
    read_plans(file)
}

pub fn read_plans<R: Read>(reader: R) -> anyhow::Result<Vec<PlanRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("failed to read CSV headers")?
        .iter()
        .map(normalize_header)
        .collect();

    let idx = |name: &str| headers.iter().position(|h| h == name);

    let required = ["plano_id", "operadora", "plano", "vidas"];
    for name in required {
        anyhow::ensure!(idx(name).is_some(), "CSV is missing the {name} column");
    }

    let mut out = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("failed to read CSV record {line}"))?;
        let field = |name: &str| idx(name).and_then(|i| record.get(i)).map(clean_text);

        let plano_id: i64 = field("plano_id")
            .unwrap_or_default()
            .parse()
            .with_context(|| format!("invalid plano_id on CSV record {line}"))?;

        let bracket_price = |column: &str| field(column).map(|v| parse_currency(&v));

        out.push(PlanRecord {
            plano_id,
            operadora: field("operadora").unwrap_or_default(),
            plano: field("plano").unwrap_or_default(),
            acomodacao: field("acomodacao").filter(|v| !v.is_empty()),
            coparticipacao: field("coparticipacao").filter(|v| !v.is_empty()),
            vidas: field("vidas").unwrap_or_default(),
            estado: field("estado").filter(|v| !v.is_empty()),
            quantidade_de_ativos: field("quantidade_de_ativos")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            faixa_0_18: bracket_price("faixa_0_18"),
            faixa_19_23: bracket_price("faixa_19_23"),
            faixa_24_28: bracket_price("faixa_24_28"),
            faixa_29_33: bracket_price("faixa_29_33"),
            faixa_34_38: bracket_price("faixa_34_38"),
            faixa_39_43: bracket_price("faixa_39_43"),
            faixa_44_48: bracket_price("faixa_44_48"),
            faixa_49_53: bracket_price("faixa_49_53"),
            faixa_54_58: bracket_price("faixa_54_58"),
            faixa_59_mais: bracket_price("faixa_59_mais"),
        });
    }

    Ok(out)
}

/// Maps a raw CSV header to its `planos` column. Age bracket headers come in
/// as request-side labels (including the stray "59 +" variant); everything
/// else is passed through lowercased.
fn normalize_header(raw: &str) -> String {
    let cleaned = clean_text(raw);
    if cleaned == "59 +" {
        return "faixa_59_mais".to_string();
    }
    for bracket in brackets::ALL {
        if cleaned == bracket.label() {
            return bracket.column().to_string();
        }
    }
    cleaned.to_lowercase()
}

/// PT-BR currency to f64: "1.234,56" -> 1234.56. Anything unparsable counts
/// as 0.0 so a single bad cell cannot abort the load.
fn parse_currency(raw: &str) -> f64 {
    let cleaned = clean_text(raw).replace('.', "").replace(',', ".");
    cleaned.parse().unwrap_or(0.0)
}

/// Strips residual quoting and surrounding whitespace.
fn clean_text(raw: &str) -> String {
    raw.replace(['"', '\''], "").trim().to_string()
}
