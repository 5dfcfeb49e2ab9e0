//! Plain-language KPI glossary shown next to every figure.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct KpiDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Short tooltip definition
    pub definition: &'static str,
    /// Longer explanation used in narrative views
    pub explanation: &'static str,
}

const FALLBACK_EXPLANATION: &str = "Indicatore finanziario";

pub const KPI_DEFINITIONS: &[KpiDefinition] = &[
    KpiDefinition {
        key: "revenue",
        label: "Ricavi",
        icon: "💰",
        definition: "Il totale delle vendite della tua azienda. Sono i soldi che entrano vendendo prodotti o servizi.",
        explanation: "I ricavi sono il totale delle vendite. Sono i soldi che entrano dalla vendita di prodotti o servizi.",
    },
    KpiDefinition {
        key: "ebitda",
        label: "EBITDA",
        icon: "📊",
        definition: "Il guadagno operativo prima di interessi, tasse, ammortamenti. Indica quanto la tua azienda guadagna dalle attività principali.",
        explanation: "L'EBITDA è il guadagno operativo prima di interessi, tasse, ammortamenti. Indica quanto l'azienda guadagna dalle attività principali.",
    },
    KpiDefinition {
        key: "ebitda_margin",
        label: "Margine EBITDA",
        icon: "📈",
        definition: "La percentuale di ricavi che diventa EBITDA. Un margine alto significa che controlli bene i costi.",
        explanation: "Il margine EBITDA indica quale percentuale dei ricavi diventa guadagno operativo. Più alto = meglio controlli i costi.",
    },
    KpiDefinition {
        key: "net_income",
        label: "Utile Netto",
        icon: "✅",
        definition: "Il guadagno finale dopo aver pagato tutto: costi, interessi e tasse. È quello che rimane davvero.",
        explanation: "L'utile netto è quello che rimane dopo aver pagato tutto: costi, interessi, tasse. È il guadagno finale.",
    },
    KpiDefinition {
        key: "equity",
        label: "Patrimonio Netto",
        icon: "🏛️",
        definition: "Il valore dell'azienda che appartiene ai soci. È la differenza tra quello che possiedi e quello che devi.",
        explanation: "Il patrimonio netto è il valore che appartiene ai soci. È la differenza tra quello che possiedi e quello che devi.",
    },
    KpiDefinition {
        key: "total_assets",
        label: "Totale Attivo",
        icon: "📦",
        definition: "Tutto quello che la tua azienda possiede: soldi in banca, crediti, macchinari, immobili.",
        explanation: "Le attività totali sono tutto quello che l'azienda possiede: soldi, crediti, macchinari, immobili.",
    },
    KpiDefinition {
        key: "total_liabilities",
        label: "Totale Debiti",
        icon: "📋",
        definition: "Tutto quello che la tua azienda deve: debiti con banche, fornitori, tasse da pagare.",
        explanation: "I debiti totali sono tutto quello che l'azienda deve: a banche, fornitori, fisco.",
    },
    KpiDefinition {
        key: "net_debt",
        label: "Indebitamento Netto",
        icon: "💳",
        definition: "I debiti finanziari meno la liquidità disponibile. Se è negativo, hai più soldi che debiti.",
        explanation: "L'indebitamento netto sono i debiti finanziari meno la liquidità disponibile.",
    },
    KpiDefinition {
        key: "revenue_growth",
        label: "Crescita Ricavi",
        icon: "🚀",
        definition: "Quanto sono aumentati (o diminuiti) i ricavi rispetto all'anno precedente.",
        explanation: "La crescita dei ricavi indica quanto sono aumentate le vendite rispetto all'anno prima.",
    },
    KpiDefinition {
        key: "debt_to_equity_ratio",
        label: "Rapporto Debito/Patrimonio",
        icon: "⚖️",
        definition: "Quanti debiti hai per ogni euro di patrimonio. Un numero basso indica solidità finanziaria.",
        explanation: "Il rapporto debiti/patrimonio indica quanti debiti hai per ogni euro di capitale proprio.",
    },
];

/// Accepts snake_case keys and the camelCase keys used by the web frontend.
fn canonical_key(key: &str) -> &str {
    match key {
        "ebitdaMargin" => "ebitda_margin",
        "netIncome" => "net_income",
        "totalAssets" => "total_assets",
        "totalLiabilities" => "total_liabilities",
        "netDebt" => "net_debt",
        "revenueGrowth" => "revenue_growth",
        "debtToEquityRatio" | "debtRatio" => "debt_to_equity_ratio",
        other => other,
    }
}

pub fn kpi_definition(key: &str) -> Option<&'static KpiDefinition> {
    let key = canonical_key(key);
    KPI_DEFINITIONS.iter().find(|d| d.key == key)
}

/// Explanation text for a KPI key. Unknown keys get a generic label.
pub fn kpi_explanation(key: &str) -> &'static str {
    kpi_definition(key)
        .map(|d| d.explanation)
        .unwrap_or(FALLBACK_EXPLANATION)
}
