//! The three fixed narrative sections.
//!
//! Each section classifies its inputs into a bucket, then looks the bucket up
//! in a template table. Placeholders in braces are filled by [`render`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{NarrativeSection, SectionStatus};
use crate::format::{format_currency, format_fixed};
use crate::kpi::status::{debt_to_equity_status, ebitda_margin_status};
use crate::kpi::{KpiSet, KpiStatus};
use crate::types::Rate;

/// Replace every `{name}` in `template` with its value.
pub(crate) fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

// ---------------------------------------------------------------------------
// Revenue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RevenueTrend {
    Strong,
    Moderate,
    Stable,
    Declining,
    FirstYear,
}

impl RevenueTrend {
    pub(crate) fn classify(growth: Option<Rate>) -> Self {
        match growth {
            None => Self::FirstYear,
            Some(g) if g > dec!(0.10) => Self::Strong,
            Some(g) if g > Decimal::ZERO => Self::Moderate,
            Some(g) if g > dec!(-0.05) => Self::Stable,
            Some(_) => Self::Declining,
        }
    }

    fn template(self) -> (SectionStatus, &'static str) {
        match self {
            Self::Strong => (
                SectionStatus::Positive,
                "Nel {year} la tua azienda ha fatturato {revenue}, con una crescita del {growth}% rispetto all'anno precedente. È un ottimo risultato che indica che il mercato sta rispondendo bene.",
            ),
            Self::Moderate => (
                SectionStatus::Neutral,
                "Nel {year} la tua azienda ha fatturato {revenue}, in crescita del {growth}% rispetto all'anno precedente. Una crescita positiva, anche se moderata.",
            ),
            Self::Stable => (
                SectionStatus::Neutral,
                "Nel {year} i ricavi sono stati {revenue}, sostanzialmente stabili rispetto all'anno precedente ({growth}%).",
            ),
            Self::Declining => (
                SectionStatus::Negative,
                "Nel {year} i ricavi sono scesi a {revenue} ({growth}%). Potrebbe essere utile capire le cause e intervenire.",
            ),
            Self::FirstYear => (
                SectionStatus::Info,
                "Nel {year} la tua azienda ha generato ricavi per {revenue}. È il primo anno che analizziamo, quindi non possiamo ancora confrontare con il passato.",
            ),
        }
    }
}

/// `growth` is `None` when there is no previous year to compare against.
pub fn revenue_section(latest: &KpiSet, growth: Option<Rate>) -> NarrativeSection {
    let (status, template) = RevenueTrend::classify(growth).template();
    let growth_pct = growth
        .map(|g| format_fixed(g.saturating_mul(dec!(100)), 1))
        .unwrap_or_default();
    let content = render(
        template,
        &[
            ("year", latest.fiscal_year.to_string()),
            ("revenue", format_currency(latest.revenue)),
            ("growth", growth_pct),
        ],
    );

    NarrativeSection {
        title: "I tuoi ricavi".into(),
        icon: "💰".into(),
        content,
        status,
    }
}

// ---------------------------------------------------------------------------
// Profitability
// ---------------------------------------------------------------------------

fn profitability_template(margin: KpiStatus) -> (SectionStatus, &'static str) {
    match margin {
        KpiStatus::Excellent => (
            SectionStatus::Positive,
            "L'EBITDA (quello che rimane dalle vendite dopo i costi operativi) è di {ebitda}, pari al {margin}% dei ricavi. È un margine eccellente! Significa che controlli molto bene i costi e generi buona cassa.",
        ),
        KpiStatus::Good => (
            SectionStatus::Positive,
            "L'EBITDA è di {ebitda}, pari al {margin}% dei ricavi. È un buon margine, sopra la media del mercato. La tua azienda genera cassa in modo sano.",
        ),
        KpiStatus::Fair => (
            SectionStatus::Neutral,
            "L'EBITDA è di {ebitda} ({margin}% dei ricavi). Il margine è nella media: c'è spazio per migliorare l'efficienza operativa.",
        ),
        KpiStatus::Poor => (
            SectionStatus::Negative,
            "L'EBITDA è di {ebitda}, con un margine del {margin}%. È un margine basso che potrebbe indicare costi troppo alti o prezzi troppo bassi. Vale la pena analizzare la struttura dei costi.",
        ),
    }
}

const NET_INCOME_POSITIVE: &str = " L'utile netto finale è di {net_income}.";
const NET_INCOME_NEGATIVE: &str = " Nota: l'utile netto è negativo ({net_income}), quindi ci sono costi (interessi, tasse, ammortamenti) che stanno erodendo il margine operativo.";

pub fn profitability_section(latest: &KpiSet) -> NarrativeSection {
    let (status, template) = profitability_template(ebitda_margin_status(latest.ebitda_margin));
    let mut content = render(
        template,
        &[
            ("ebitda", format_currency(latest.ebitda)),
            ("margin", format_fixed(latest.ebitda_margin.saturating_mul(dec!(100)), 1)),
        ],
    );

    let net_income_clause = if latest.net_income > Decimal::ZERO {
        NET_INCOME_POSITIVE
    } else {
        NET_INCOME_NEGATIVE
    };
    content.push_str(&render(
        net_income_clause,
        &[("net_income", format_currency(latest.net_income))],
    ));

    NarrativeSection {
        title: "La tua redditività".into(),
        icon: "📊".into(),
        content,
        status,
    }
}

// ---------------------------------------------------------------------------
// Financial structure
// ---------------------------------------------------------------------------

const NEGATIVE_EQUITY: &str = "Attenzione: il patrimonio netto è negativo ({equity}). Significa che i debiti superano il valore delle attività. È una situazione da monitorare attentamente.";
const BALANCED_NO_RATIO: &str = "Il patrimonio netto è di {equity} e i debiti totali sono {liabilities}. Complessivamente la struttura patrimoniale sembra bilanciata.";
const NET_CASH: &str = " Buona notizia: hai più liquidità che debiti finanziari (posizione finanziaria netta positiva di {net_cash}).";
const HIGH_NET_DEBT: &str = " L'indebitamento finanziario netto ({net_debt}) è significativo rispetto all'EBITDA generato.";

/// Net debt above this multiple of EBITDA is called out.
const NET_DEBT_EBITDA_WARNING: Decimal = dec!(3);

fn leverage_template(leverage: KpiStatus) -> (SectionStatus, &'static str) {
    match leverage {
        KpiStatus::Excellent => (
            SectionStatus::Positive,
            "La struttura finanziaria è molto solida: hai {equity} di patrimonio netto e {liabilities} di debiti. Il rapporto debiti/patrimonio ({ratio}) è basso, il che ti dà molta flessibilità.",
        ),
        KpiStatus::Good => (
            SectionStatus::Positive,
            "La struttura finanziaria è equilibrata: {equity} di patrimonio netto contro {liabilities} di debiti. Il rapporto ({ratio}) è nella norma per una PMI.",
        ),
        KpiStatus::Fair => (
            SectionStatus::Neutral,
            "Il patrimonio netto è di {equity} e i debiti ammontano a {liabilities}. Il rapporto debiti/patrimonio ({ratio}) è nella media, ma potresti considerare di ridurre l'indebitamento.",
        ),
        KpiStatus::Poor => (
            SectionStatus::Negative,
            "L'indebitamento è elevato: {liabilities} di debiti contro {equity} di patrimonio netto. Un rapporto di {ratio} indica che l'azienda è molto leveraggiata.",
        ),
    }
}

pub fn financial_structure_section(latest: &KpiSet) -> NarrativeSection {
    let equity = format_currency(latest.equity);
    let liabilities = format_currency(latest.total_liabilities);

    let (status, mut content) = if latest.equity <= Decimal::ZERO {
        (
            SectionStatus::Negative,
            render(NEGATIVE_EQUITY, &[("equity", equity)]),
        )
    } else if let Some(ratio) = latest.debt_to_equity_ratio {
        let (status, template) = leverage_template(debt_to_equity_status(Some(ratio)));
        (
            status,
            render(
                template,
                &[
                    ("equity", equity),
                    ("liabilities", liabilities),
                    ("ratio", format_fixed(ratio, 2)),
                ],
            ),
        )
    } else {
        (
            SectionStatus::Info,
            render(
                BALANCED_NO_RATIO,
                &[("equity", equity), ("liabilities", liabilities)],
            ),
        )
    };

    if let Some(net_debt) = latest.net_debt {
        if net_debt < Decimal::ZERO {
            content.push_str(&render(
                NET_CASH,
                &[("net_cash", format_currency(net_debt.abs()))],
            ));
        } else if net_debt > latest.ebitda.saturating_mul(NET_DEBT_EBITDA_WARNING) {
            content.push_str(&render(
                HIGH_NET_DEBT,
                &[("net_debt", format_currency(net_debt))],
            ));
        }
    }

    NarrativeSection {
        title: "La tua solidità finanziaria".into(),
        icon: "🏛️".into(),
        content,
        status,
    }
}
