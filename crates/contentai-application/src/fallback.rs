//! Placeholder content shown when generation is unavailable.

use contentai_core::generation::{Idea, IdeasRequest};

const FORMATS: [&str; 5] = [
    "Reação engraçada",
    "Desafio divertido",
    "Top momentos",
    "Paródia",
    "Situação cômica",
];

const DESCRIPTIONS: [&str; 4] = [
    "Vídeo engraçado e envolvente para seu público",
    "Conteúdo viral que vai fazer sucesso",
    "Ideia criativa para bombar nas redes",
    "Conteúdo divertido que todos vão compartilhar",
];

/// `request.count` placeholder ideas for the request's niche and audience.
pub fn fallback_ideas(request: &IdeasRequest) -> Vec<Idea> {
    let hashtags = format!(
        "{} {} #humor #viral #engraçado",
        hashtag(&request.niche),
        hashtag(&request.audience)
    );

    (0..request.count as usize)
        .map(|i| Idea {
            title: format!(
                "{} de {} para {}",
                FORMATS[i % FORMATS.len()],
                request.niche,
                request.audience
            ),
            description: DESCRIPTIONS[i % DESCRIPTIONS.len()].to_string(),
            hashtags: hashtags.clone(),
        })
        .collect()
}

/// A generic timed outline for a short video about `idea`.
pub fn fallback_script(idea: &str) -> String {
    let keywords = idea
        .to_lowercase()
        .split_whitespace()
        .take(3)
        .filter(|word| word.chars().count() > 3)
        .map(hashtag)
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "ROTEIRO PARA: {idea}\n\
         \n\
         DURAÇÃO: 20-25 segundos\n\
         \n\
         [0-5s] GANCHO\n\
         - Entrada com expressão exagerada\n\
         - Texto na tela apresentando a situação\n\
         \n\
         [5-15s] DESENVOLVIMENTO\n\
         - Cortes rápidos, 2-3 ângulos diferentes\n\
         - Música em alta ao fundo\n\
         \n\
         [15-22s] CLÍMAX\n\
         - O momento mais engraçado da cena\n\
         - Reação exagerada\n\
         \n\
         [22-25s] CHAMADA PARA AÇÃO\n\
         - Olhar para a câmera e pedir like e compartilhamento\n\
         \n\
         HASHTAGS: {keywords} #viral #engraçado #tiktok\n"
    )
}

fn hashtag(word: &str) -> String {
    format!("#{}", word.split_whitespace().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_ideas_rotate_formats() {
        let ideas = fallback_ideas(&IdeasRequest::new("gatos", "jovens", 6));

        assert_eq!(ideas.len(), 6);
        assert_eq!(ideas[0].title, "Reação engraçada de gatos para jovens");
        assert_eq!(ideas[5].title, "Reação engraçada de gatos para jovens");
        assert_eq!(ideas[4].description, ideas[0].description);
        assert!(ideas[0].hashtags.starts_with("#gatos #jovens"));
    }

    #[test]
    fn test_multi_word_niche_becomes_one_tag() {
        let ideas = fallback_ideas(&IdeasRequest::new("pets fofos", "pais", 1));
        assert!(ideas[0].hashtags.starts_with("#petsfofos #pais"));
    }

    #[test]
    fn test_fallback_script_tags_long_leading_words() {
        let script = fallback_script("Gato pulando no sofá da sala");

        assert!(script.contains("ROTEIRO PARA: Gato pulando no sofá da sala"));
        // "no" is short and "sofá" is past the first three words
        assert!(script.contains("HASHTAGS: #gato #pulando #viral"));
    }
}
