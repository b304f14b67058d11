//! # Document Layout
//!
//! The fixed plain-text layout of a rendered petition document.
//!
//! The layout is positional and labelled in Portuguese; it is the wire
//! format of this subsystem and consumers (audit logs, the viewer screen)
//! depend on it byte-for-byte. Sections, in order:
//!
//! 1. SOLICITANTE: requester identity, or an anonymity placeholder
//! 2. CONTEÚDO DA DENÚNCIA: content snapshot
//! 3. ARQUIVOS DE EVIDÊNCIA: full evidence list, never paginated
//! 4. ENGAJAMENTO: stats counters
//! 5. CONQUISTAS: achieved milestones only
//! 6. ATUALIZAÇÕES: full update feed
//! 7. ASSINATURAS: the paginated ledger slice
//!
//! followed by a navigation footer and the authenticity footer.

use super::pagination::{page_offset, page_slice, total_pages};
use chrono::{DateTime, Utc};
use shared_types::Petition;
use std::fmt::Write;

const WIDTH: usize = 64;

fn heavy_rule() -> String {
    "═".repeat(WIDTH)
}

fn light_rule() -> String {
    "─".repeat(WIDTH)
}

fn centered(text: &str) -> String {
    let pad = WIDTH.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn fmt_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y %H:%M (UTC)").to_string()
}

fn fmt_date(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y").to_string()
}

fn section_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", light_rule());
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", light_rule());
}

/// Render the complete document for one page of the signature ledger.
///
/// Pure: every volatile input (hash, generation time) is passed in by the
/// service so the same arguments always yield the same text.
#[must_use]
pub fn render_document(
    petition: &Petition,
    page: usize,
    per_page: usize,
    hash: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    // Header
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "{}", centered("ABAIXO-ASSINADO DIGITAL"));
    let _ = writeln!(out, "{}", centered("PLATAFORMA CIVIC-LEDGER"));
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out);
    let _ = writeln!(out, "Documento: PET-{}", petition.id);
    let _ = writeln!(out, "Criado em: {}", fmt_timestamp(petition.created_at));
    let _ = writeln!(out, "Atualizado em: {}", fmt_timestamp(petition.updated_at));
    let _ = writeln!(out);

    render_requester(&mut out, petition);
    render_content(&mut out, petition);
    render_evidence(&mut out, petition);
    render_stats(&mut out, petition);
    render_achievements(&mut out, petition);
    render_updates(&mut out, petition);
    render_signatures(&mut out, petition, page, per_page);

    // Authenticity footer
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "AUTENTICIDADE");
    let _ = writeln!(out, "Hash do documento: {hash}");
    let _ = writeln!(out, "Gerado em: {}", fmt_timestamp(generated_at));
    let _ = writeln!(
        out,
        "Documento gerado eletronicamente. O hash acima permite verificar"
    );
    let _ = writeln!(out, "a integridade do conteúdo listado nesta via.");
    let _ = writeln!(out, "{}", heavy_rule());

    out
}

fn render_requester(out: &mut String, petition: &Petition) {
    section_header(out, "1. SOLICITANTE");
    if petition.requester.is_anonymous {
        let _ = writeln!(out, "*** SOLICITANTE ANÔNIMO ***");
        let _ = writeln!(out, "Dados pessoais visíveis apenas à administração.");
    } else {
        let _ = writeln!(out, "Nome: {}", petition.requester.name);
        let _ = writeln!(out, "Identificação: {}", petition.requester.user_id);
        let _ = writeln!(out, "CPF: {}", petition.requester.legal_id);
        let _ = writeln!(out, "E-mail: {}", petition.requester.email);
    }
    let _ = writeln!(out);
}

fn render_content(out: &mut String, petition: &Petition) {
    section_header(out, "2. CONTEÚDO DA DENÚNCIA");
    let content = &petition.content;
    let _ = writeln!(out, "Título: {}", content.title);
    let _ = writeln!(out, "Categoria: {}", content.category);
    let _ = writeln!(out, "Localização: {} - {}", content.city, content.state);
    let _ = writeln!(out, "Registrado em: {}", fmt_date(content.reported_at));
    let _ = writeln!(out, "Descrição:");
    let _ = writeln!(out, "{}", content.description);
    if content.tags.is_empty() {
        let _ = writeln!(out, "Tags: (nenhuma)");
    } else {
        let _ = writeln!(out, "Tags: {}", content.tags.join(", "));
    }
    let _ = writeln!(out);
}

fn render_evidence(out: &mut String, petition: &Petition) {
    section_header(out, "3. ARQUIVOS DE EVIDÊNCIA");
    if petition.evidence_files.is_empty() {
        let _ = writeln!(out, "Nenhum arquivo de evidência.");
    }
    for (i, file) in petition.evidence_files.iter().enumerate() {
        let size_kb = file.size_bytes.div_ceil(1024);
        let _ = writeln!(
            out,
            "{}. {} ({}, {} KB)",
            i + 1,
            file.name,
            file.mime_type,
            size_kb
        );
        let _ = writeln!(out, "   Enviado em: {}", fmt_date(file.uploaded_at));
        let _ = writeln!(out, "   URL: {}", file.url);
    }
    let _ = writeln!(out);
}

fn render_stats(out: &mut String, petition: &Petition) {
    section_header(out, "4. ENGAJAMENTO");
    let stats = &petition.stats;
    let _ = writeln!(out, "Assinaturas: {}", stats.total_signatures);
    let _ = writeln!(out, "Apoios: {}", stats.total_supports);
    let _ = writeln!(out, "Visualizações: {}", stats.total_views);
    let _ = writeln!(out, "Comentários: {}", stats.total_comments);
    let _ = writeln!(out, "Compartilhamentos: {}", stats.total_shares);
    let _ = writeln!(out);
}

fn render_achievements(out: &mut String, petition: &Petition) {
    section_header(out, "5. CONQUISTAS");
    let achieved: Vec<_> = petition
        .achievements
        .iter()
        .filter(|a| a.achieved)
        .collect();

    if achieved.is_empty() {
        let _ = writeln!(out, "Nenhuma conquista alcançada.");
    }
    for achievement in achieved {
        let _ = writeln!(
            out,
            "{} {} — {}",
            achievement.icon, achievement.badge_name, achievement.badge_description
        );
        if let Some(at) = achievement.achieved_at {
            let _ = writeln!(out, "   Conquistado em: {}", fmt_date(at));
        }
    }
    let _ = writeln!(out);
}

fn render_updates(out: &mut String, petition: &Petition) {
    section_header(out, "6. ATUALIZAÇÕES");
    if petition.updates.is_empty() {
        let _ = writeln!(out, "Nenhuma atualização.");
    }
    for update in &petition.updates {
        let _ = writeln!(
            out,
            "[{}] {} — {} ({})",
            fmt_date(update.created_at),
            update.title,
            update.author.name,
            update.author.role
        );
        let _ = writeln!(out, "{}", update.content);
    }
    let _ = writeln!(out);
}

fn render_signatures(out: &mut String, petition: &Petition, page: usize, per_page: usize) {
    let pages = total_pages(petition.signatures.len(), per_page);
    section_header(
        out,
        &format!("7. ASSINATURAS (Página {page} de {pages})"),
    );

    let slice = page_slice(&petition.signatures, page, per_page);
    if slice.is_empty() {
        let _ = writeln!(out, "Nenhuma assinatura nesta página.");
    }
    let offset = page_offset(page, per_page);
    for (i, signature) in slice.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:08}. {} — CPF: {} — {} — {}",
            offset + i + 1,
            signature.name,
            signature.legal_id,
            signature.email,
            fmt_timestamp(signature.signed_at)
        );
    }
    let _ = writeln!(out);

    // Navigation footer
    let has_prev = page > 1 && pages > 0;
    let has_next = page < pages;
    let _ = writeln!(
        out,
        "Página anterior: {} | Próxima página: {}",
        if has_prev { "sim" } else { "não" },
        if has_next { "sim" } else { "não" }
    );
    let _ = writeln!(out);
}
