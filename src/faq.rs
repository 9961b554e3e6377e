/// Which FAQ entry is expanded. Opening one entry closes the others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqDisclosure {
    active: Option<usize>,
}

impl FaqDisclosure {
    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.active = if self.is_open(index) { None } else { Some(index) };
        self.active
    }
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Qual é o custo real do investimento em CAV?",
        answer: "O custo real pode ser ZERO ou até negativo. Veja como: ao investir R$ 100k em CAV, você primeiro deduz como despesa operacional, economizando ~R$ 34k em IRPJ e CSLL. Seu custo passa para R$ 66k. Depois, você abate 100% do valor (R$ 100k) do seu IR devido. Com esses dois benefícios combinados, o desembolso líquido pode chegar a zero. Adicionalmente, você ainda pode ter retorno financeiro com a participação nos lucros da obra audiovisual. É por isso que chamamos de \"lucro escondido\": muitas empresas pagam impostos sem saber que poderiam reinvestir esse valor de forma inteligente.",
    },
    FaqEntry {
        question: "O que é CAV (Certificado de Investimento Audiovisual)?",
        answer: "O CAV é um título emitido por empresas produtoras de obras audiovisuais brasileiras, que permite às empresas investidoras receber participação nos resultados comerciais da obra. O investimento em CAV pode ser deduzido do Imposto de Renda devido por empresas tributadas pelo Lucro Real, até o limite de 3% do imposto devido, conforme estabelecido pela Lei do Audiovisual (Lei nº 8.685/93).",
    },
    FaqEntry {
        question: "Quem pode investir em CAV?",
        answer: "Podem investir em CAV empresas tributadas pelo regime de Lucro Real que possuam Imposto de Renda devido. O investimento é limitado a 3% do imposto de renda devido, antes de qualquer incentivo fiscal. É uma excelente opção para empresas que buscam otimizar sua carga tributária enquanto apoiam a cultura brasileira.",
    },
    FaqEntry {
        question: "Como funciona o abatimento fiscal?",
        answer: "Ao investir em CAV, sua empresa pode deduzir 100% do valor investido diretamente do Imposto de Renda devido, respeitando o limite de 3% do IR antes de outros incentivos. Ou seja, o valor investido não representa um custo adicional para a empresa: é uma realocação do imposto que seria pago ao governo para o fomento do audiovisual brasileiro.",
    },
    FaqEntry {
        question: "É possível ter retorno financeiro além do benefício fiscal?",
        answer: "Sim! Ao adquirir um CAV, a empresa investidora também passa a ter direito a uma participação nos resultados comerciais da obra audiovisual. Isso significa que, além do benefício fiscal imediato, há potencial de retorno financeiro caso a obra tenha sucesso comercial em bilheteria, streaming, vendas internacionais e outros canais de distribuição.",
    },
    FaqEntry {
        question: "Qual o papel da CineTax nesse processo?",
        answer: "A CineTax é uma plataforma tecnológica que conecta empresas investidoras a projetos audiovisuais aprovados pela Ancine. Nós simplificamos todo o processo: desde a seleção de projetos até a emissão dos certificados, passando pela análise de conformidade e acompanhamento do investimento. Nossa missão é tornar o investimento em cultura acessível, seguro e rentável.",
    },
];
