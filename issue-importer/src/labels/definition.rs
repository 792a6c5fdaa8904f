//! Static label table.

/// A label bootstrapped into the target repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelDefinition {
    /// Label name, as referenced by issue `labels` lists.
    pub name: &'static str,

    /// Six hex digits, without the leading `#`.
    pub color: &'static str,

    /// Short description shown by the tracker.
    pub description: &'static str,
}

const fn label(
    name: &'static str,
    color: &'static str,
    description: &'static str,
) -> LabelDefinition {
    LabelDefinition {
        name,
        color,
        description,
    }
}

/// Every label the importer ensures exists before creating issues.
pub const LABELS: &[LabelDefinition] = &[
    // Phases
    label("fase-1", "0052CC", "Fase 1: Planejamento e Estruturação"),
    label("fase-2", "1D76DB", "Fase 2: Design e Prototipagem"),
    label("fase-3", "5319E7", "Fase 3: Desenvolvimento Backend"),
    label("fase-4", "B60205", "Fase 4: Desenvolvimento Frontend"),
    label("fase-5", "D93F0B", "Fase 5: Testes"),
    label("fase-6", "FBCA04", "Fase 6: Deploy e Infraestrutura"),
    label("fase-7", "0E8A16", "Fase 7: Documentação"),
    label("fase-8", "006B75", "Fase 8: Lançamento Beta"),
    label("fase-9", "1D76DB", "Fase 9: Versionamento e Release"),
    label("fase-10", "0052CC", "Fase 10: Pós-Lançamento"),
    // Categories
    label("planejamento", "C2E0C6", "Atividades de planejamento"),
    label("design", "FFB6C1", "Design e UX"),
    label("backend", "4A5568", "Desenvolvimento backend"),
    label("frontend", "61DAFB", "Desenvolvimento frontend"),
    label("testes", "F9D0C4", "Testes e QA"),
    label("devops", "FEF2C0", "DevOps e infraestrutura"),
    label("documentação", "D4C5F9", "Documentação"),
    // Specific
    label("requisitos", "BFD4F2", "Levantamento de requisitos"),
    label("arquitetura", "5319E7", "Arquitetura de sistema"),
    label("tecnologia", "1D76DB", "Decisões tecnológicas"),
    label("configuração", "0052CC", "Configuração de ambiente"),
    label("design-system", "FFB6C1", "Design system"),
    label("ui-ux", "FF69B4", "Interface e experiência do usuário"),
    label("prototipagem", "FFC0CB", "Prototipagem"),
    label("validação", "90EE90", "Validação com usuários"),
    label("database", "4A5568", "Banco de dados"),
    label("autenticação", "FFD700", "Autenticação e autorização"),
    label("api", "00BFFF", "APIs"),
    label("pacientes", "98D8C8", "Gestão de pacientes"),
    label("agendamentos", "F7DC6F", "Sistema de agendamentos"),
    label("financeiro", "52BE80", "Gestão financeira"),
    label("setup", "E8DAEF", "Configuração inicial"),
    label("dashboard", "AED6F1", "Dashboard e métricas"),
    label("e2e", "F9E79F", "Testes end-to-end"),
    label("infraestrutura", "FEF2C0", "Infraestrutura"),
    label("ci-cd", "F4D03F", "CI/CD"),
    label("monitoramento", "85929E", "Monitoramento"),
    label("observabilidade", "99A3A4", "Observabilidade"),
    label("técnica", "D4C5F9", "Documentação técnica"),
    label("usuário", "C39BD3", "Documentação de usuário"),
    label("beta", "3498DB", "Fase beta"),
    label("preparação", "AED6F1", "Preparação"),
    label("feedback", "5DADE2", "Feedback de usuários"),
    label("release", "27AE60", "Release"),
    label("v1.0", "229954", "Versão 1.0"),
    label("marketing", "E74C3C", "Marketing"),
    label("comunicação", "EC7063", "Comunicação"),
    label("lançamento", "27AE60", "Lançamento"),
    label("produção", "1E8449", "Produção"),
    label("pós-lançamento", "0052CC", "Pós-lançamento"),
    label("manutenção", "95A5A6", "Manutenção"),
    label("suporte", "7B7D7D", "Suporte"),
    label("roadmap", "48C9B0", "Roadmap de produto"),
    label("evolução", "45B39D", "Evolução contínua"),
    label("stack", "5319E7", "Stack tecnológica"),
    label("versionamento", "1D76DB", "Versionamento"),
    label("processo", "0052CC", "Processos"),
];

/// Finds a label in [`LABELS`] by name.
#[must_use]
pub fn find_label(name: &str) -> Option<&'static LabelDefinition> {
    LABELS.iter().find(|label| label.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn label_names_are_unique() {
        let names: HashSet<_> = LABELS.iter().map(|label| label.name).collect();
        assert_eq!(names.len(), LABELS.len());
    }

    #[test]
    fn colors_are_six_hex_digits() {
        for label in LABELS {
            assert_eq!(label.color.len(), 6, "{}", label.name);
            assert!(
                label.color.chars().all(|c| c.is_ascii_hexdigit()),
                "{}",
                label.name
            );
        }
    }

    #[test]
    fn can_find_label() {
        assert_eq!(find_label("setup").map(|l| l.color), Some("E8DAEF"));
        assert!(find_label("unknown").is_none());
    }
}
