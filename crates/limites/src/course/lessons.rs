//! Course content: the home page and the five lessons.

use super::blocks::{Block, CalloutKind, Formula};
use super::routes::Route;

/// One routed page.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub route: Route,
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn formulas(&self) -> Vec<Formula> {
        self.blocks.iter().flat_map(Block::formulas).collect()
    }

    pub fn has_visualizer(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::Visualizer))
    }
}

pub fn page(route: Route) -> Page {
    match route {
        Route::Home => home(),
        Route::PointLimits => point_limits(),
        Route::EpsilonDelta => epsilon_delta(),
        Route::Properties => properties(),
        Route::Indeterminate => indeterminate(),
        Route::Infinitesimals => infinitesimals(),
    }
}

/// All pages in sidebar order.
pub fn pages() -> Vec<Page> {
    Route::ALL.into_iter().map(page).collect()
}

fn sub(s: &str) -> Block {
    Block::Subheading(s.to_string())
}

fn p(s: &str) -> Block {
    Block::Paragraph(s.to_string())
}

fn formula(tex: &str) -> Block {
    Block::Formula(Formula::display(tex))
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn callout(kind: CalloutKind, body: Vec<Block>) -> Block {
    Block::Callout { kind, body }
}

fn practice(items: &[&str]) -> Block {
    Block::Exercises {
        title: "Ejercicios de Práctica".to_string(),
        items: list(items),
    }
}

fn home() -> Page {
    Page {
        route: Route::Home,
        title: "Curso de Límites para Ciencias de la Computación",
        blocks: vec![
            p("**Autor:** Lic. Felipe Martínez"),
            p("**Fecha:** 3 de agosto de 2025"),
            p("Bienvenido a este curso interactivo diseñado para estudiantes de Ciencias de la \
               Computación. Explora el cálculo a través de ejemplos, visualizaciones y ejercicios \
               prácticos."),
        ],
    }
}

fn point_limits() -> Page {
    Page {
        route: Route::PointLimits,
        title: "1. Límites de una Función en un Punto",
        blocks: vec![
            sub("1.1. Introducción"),
            p("Los límites describen cómo se comporta una función cerca de un punto o en el \
               infinito. Son la base del análisis de algoritmos, el procesamiento de señales y \
               los gráficos por computadora."),
            callout(
                CalloutKind::History,
                vec![p("Arquímedes aproximó áreas curvas con el método de exhausción. Newton y \
                        Leibniz trabajaron con cantidades infinitesimales, y Cauchy y Weierstrass \
                        formalizaron el límite con la definición épsilon-delta.")],
            ),
            sub("1.2. Definición Intuitiva de Límite"),
            p("Si al acercarse $x$ a $a$ por ambos lados los valores de $f(x)$ se acercan a un \
               único número $L$, decimos que el límite de $f(x)$ cuando $x$ tiende a $a$ es $L$:"),
            formula(r"\lim_{x \to a} f(x) = L"),
            p("La función no necesita estar definida en $x = a$; el límite describe una tendencia."),
            sub("1.3. Límites Laterales"),
            Block::Bullets(list(&[
                r"**Límite por la derecha:** $\lim_{x \to a^+} f(x)$",
                r"**Límite por la izquierda:** $\lim_{x \to a^-} f(x)$",
            ])),
            p(r"El límite $\lim_{x \to a} f(x) = L$ existe si y solo si $\lim_{x \to a^-} f(x) = L$ y $\lim_{x \to a^+} f(x) = L$."),
            sub("1.4. Cálculo de Límites por Sustitución Directa"),
            p("Si $f$ es continua en $a$, basta con sustituir:"),
            formula(r"\lim_{x \to a} f(x) = f(a)"),
            callout(
                CalloutKind::Example,
                vec![
                    p(r"**Ejercicio 1.1** Calcule el límite de $f(x) = x^2 - 3x + 2$ cuando $x$ tiende a 4."),
                    Block::Steps(list(&[
                        "Identificar la función y el punto: $a = 4$.",
                        r"Sustituir: $\lim_{x \to 4} (x^2 - 3x + 2) = (4)^2 - 3(4) + 2$",
                        "Operar: $16 - 12 + 2 = 6$",
                    ])),
                    p("Por lo tanto, el límite es 6."),
                ],
            ),
            practice(&[
                r"$\lim_{x \to 2} (5x - 3) = 7$",
                r"$\lim_{x \to -1} (x^2 + 2x + 1) = 0$",
                r"$\lim_{x \to 0} \frac{x+1}{x-1} = -1$",
                r"$\lim_{x \to 0} (e^x + 1) = 2$",
                r"$\lim_{x \to 1} (\ln x + 5) = 5$",
                r"$\lim_{x \to -2} (x^3 - 4x) = 0$",
                r"$\lim_{x \to 5} \frac{2x}{x-3} = 5$",
                r"$\lim_{x \to \pi} (\sin x) = 0$",
                r"$\lim_{x \to -3} \frac{x^2 - 9}{x + 3} = -6$",
                r"$\lim_{x \to 2} \frac{x^2 - 4}{x - 2} = 4$",
            ]),
        ],
    }
}

fn epsilon_delta() -> Page {
    Page {
        route: Route::EpsilonDelta,
        title: "2. Concepto de Límite",
        blocks: vec![
            sub("2.1. Introducción"),
            p("La definición formal de límite es la piedra angular del cálculo y subyace a los \
               métodos numéricos y al análisis de convergencia."),
            callout(
                CalloutKind::History,
                vec![p("Cauchy introdujo la idea de épsilon-delta y Weierstrass la refinó, \
                        dando al cálculo bases rigurosas.")],
            ),
            sub("2.2. Definición Formal de Límite (Definición Épsilon-Delta)"),
            callout(
                CalloutKind::Definition,
                vec![p(r"$\lim_{x \to a} f(x) = L$ si para cada $\epsilon > 0$ existe un $\delta > 0$ tal que si $0 < |x - a| < \delta$, entonces $|f(x) - L| < \epsilon$.")],
            ),
            sub("2.3. Interpretación Gráfica de la Definición Épsilon-Delta"),
            p("Una banda horizontal de ancho $2\\epsilon$ centrada en $L$ determina una banda \
               vertical de ancho $2\\delta$ centrada en $a$ dentro de la cual la gráfica no sale \
               de la banda horizontal."),
            sub("2.4. Importancia de la Definición Formal en Ciencias de la Computación"),
            Block::Bullets(list(&[
                "**Análisis de Algoritmos:** la notación O-grande se basa en límites.",
                "**Precisión Numérica:** errores de redondeo y convergencia de métodos iterativos.",
                "**Gráficos por Computadora:** suavizado de curvas y superficies.",
            ])),
            callout(
                CalloutKind::Example,
                vec![
                    p(r"**Ejercicio 2.1** Demuestre que $\lim_{x \to 2} (3x - 1) = 5$."),
                    Block::Steps(list(&[
                        r"Partir de $|f(x) - L| < \epsilon$: $|3x - 6| < \epsilon$",
                        r"Factorizar: $3|x - 2| < \epsilon$",
                        r"Despejar: $|x - 2| < \frac{\epsilon}{3}$",
                        r"Elegir $\delta = \frac{\epsilon}{3}$.",
                    ])),
                ],
            ),
            practice(&[
                r"$\lim_{x \to 1} (2x + 3) = 5$. Respuesta: $\delta = \frac{\epsilon}{2}$",
                r"$\lim_{x \to -1} (4x + 1) = -3$. Respuesta: $\delta = \frac{\epsilon}{4}$",
                r"$\lim_{x \to 3} x^2 = 9$. Respuesta: $\delta = \min(1, \frac{\epsilon}{7})$",
                r"$\lim_{x \to 0} x^3 = 0$. Respuesta: $\delta = \sqrt[3]{\epsilon}$",
                r"$\lim_{x \to 4} \sqrt{x} = 2$. Respuesta: $\delta = \min(1, 2\epsilon)$",
            ]),
            Block::Visualizer,
        ],
    }
}

fn properties() -> Page {
    Page {
        route: Route::Properties,
        title: "3. Propiedades de los Límites",
        blocks: vec![
            sub("3.1. Introducción"),
            p("Las propiedades de los límites permiten descomponer funciones complejas en \
               operaciones con límites más sencillos."),
            callout(
                CalloutKind::History,
                vec![p("Estas reglas se establecieron de forma rigurosa en el siglo XIX, con la \
                        formalización de Cauchy y Weierstrass.")],
            ),
            sub("3.2. Propiedades Fundamentales de los Límites"),
            p(r"Sean $f$ y $g$ funciones y $c$ una constante. Si $\lim_{x \to a} f(x)$ y $\lim_{x \to a} g(x)$ existen:"),
            formula(r"\lim_{x \to a} c = c"),
            formula(r"\lim_{x \to a} x = a"),
            formula(r"\lim_{x \to a} [f(x) \pm g(x)] = \lim_{x \to a} f(x) \pm \lim_{x \to a} g(x)"),
            formula(r"\lim_{x \to a} [f(x) \cdot g(x)] = \lim_{x \to a} f(x) \cdot \lim_{x \to a} g(x)"),
            formula(r"\lim_{x \to a} [c \cdot f(x)] = c \cdot \lim_{x \to a} f(x)"),
            formula(r"\lim_{x \to a} \frac{f(x)}{g(x)} = \frac{\lim_{x \to a} f(x)}{\lim_{x \to a} g(x)}"),
            formula(r"\lim_{x \to a} [f(x)]^n = \left[ \lim_{x \to a} f(x) \right]^n"),
            formula(r"\lim_{x \to a} \sqrt[n]{f(x)} = \sqrt[n]{\lim_{x \to a} f(x)}"),
            p(r"El cociente exige $\lim_{x \to a} g(x) \neq 0$. Para la composición, si $\lim_{x \to a} g(x) = L$ y $f$ es continua en $L$, entonces $\lim_{x \to a} f(g(x)) = f(L)$."),
            sub("3.3. Relevancia en Ciencias de la Computación"),
            Block::Bullets(list(&[
                "**Análisis Numérico:** convergencia de métodos iterativos.",
                "**Procesamiento de Señales:** comportamiento de filtros.",
                "**Optimización:** puntos críticos y funciones objetivo.",
                "**Gráficos por Computadora:** continuidad de curvas y superficies.",
            ])),
            callout(
                CalloutKind::Example,
                vec![
                    p(r"**Ejercicio 3.1** Calcule $\lim_{x \to 1} \frac{x^2 + 2x - 3}{x - 1}$."),
                    p(r"Sustituyendo $x = 1$ se obtiene $\frac{0}{0}$. Factorizando: $\frac{(x+3)(x-1)}{x-1} = x+3 \to 4$."),
                ],
            ),
            practice(&[
                r"$\lim_{x \to 2} (x^3 - 3x + 5) = 7$",
                r"$\lim_{x \to -1} \frac{x^2 + 5}{x + 2} = 6$",
            ]),
        ],
    }
}

fn indeterminate() -> Page {
    Page {
        route: Route::Indeterminate,
        title: "4. Indeterminaciones",
        blocks: vec![
            sub("4.1. Introducción"),
            p(r"Algunas sustituciones producen expresiones sin valor definido, como $\frac{0}{0}$ o $\frac{\infty}{\infty}$. Resolverlas exige transformar la expresión."),
            callout(
                CalloutKind::History,
                vec![p("Guillaume de l’Hôpital dio nombre a la regla que resuelve los casos \
                        0/0 y ∞/∞ mediante derivadas.")],
            ),
            sub("4.2. Tipos Comunes de Indeterminaciones"),
            Block::Bullets(list(&[
                r"$\frac{0}{0}$",
                r"$\frac{\infty}{\infty}$",
                r"$\infty - \infty$",
                r"$0 \cdot \infty$",
                r"$1^\infty$",
                "$0^0$",
                r"$\infty^0$",
            ])),
            sub("4.3. Técnicas para Resolver Indeterminaciones"),
            p("**4.3.1. Indeterminación 0/0**: factorización, multiplicación por el conjugado, \
               regla de L’Hôpital."),
            p("**4.3.2. Indeterminación ∞/∞**: dividir por la potencia más alta, regla de \
               L’Hôpital."),
            p("**4.3.3. Otras Indeterminaciones**: transformar a 0/0 o ∞/∞."),
            callout(
                CalloutKind::Example,
                vec![
                    p(r"**Ejercicio 4.1** Calcule $\lim_{x \to 2} \frac{x^2 - 4}{x - 2}$."),
                    p(r"$\frac{0}{0}$, factorizamos: $\frac{(x-2)(x+2)}{x-2} = x+2 \to 4$."),
                ],
            ),
            practice(&[
                r"$\lim_{x \to 3} \frac{x^2 - 9}{x - 3} = 6$",
                r"$\lim_{x \to -1} \frac{x^2 + 3x + 2}{x + 1} = 1$",
            ]),
        ],
    }
}

fn infinitesimals() -> Page {
    let rows = [
        (r"\sin x", "x"),
        (r"\tan x", "x"),
        ("e^x - 1", "x"),
        (r"\ln(1 + x)", "x"),
        (r"1 - \cos x", r"\frac{x^2}{2}"),
        (r"(1 + x)^\alpha - 1", r"\alpha x"),
    ];
    Page {
        route: Route::Infinitesimals,
        title: "5. Infinitésimos",
        blocks: vec![
            sub("5.1. Introducción"),
            p("Un infinitésimo es una función que tiende a cero en un punto. Comparar la \
               velocidad con la que distintas funciones se anulan simplifica muchos límites."),
            callout(
                CalloutKind::History,
                vec![p("La idea de cantidades infinitamente pequeñas se formalizó con el rigor \
                        del análisis del siglo XIX.")],
            ),
            sub("5.2. Definición de Infinitésimo"),
            callout(
                CalloutKind::Definition,
                vec![p(r"$f(x)$ es un infinitésimo en $a$ si $\lim_{x \to a} f(x) = 0$.")],
            ),
            sub("5.3. Comparación de Infinitésimos"),
            p(r"Si $\lim_{x \to a} \frac{f(x)}{g(x)} = 1$, entonces $f$ y $g$ son infinitésimos equivalentes."),
            sub("5.4. Tabla de Infinitésimos Equivalentes (cuando x → 0)"),
            Block::EquivalenceTable {
                header: ("Infinitésimo".to_string(), "Equivalente".to_string()),
                rows: rows
                    .iter()
                    .map(|(a, b)| (a.to_string(), b.to_string()))
                    .collect(),
            },
            callout(
                CalloutKind::Example,
                vec![
                    p(r"**Ejercicio 5.1** Calcule $\lim_{x \to 0} \frac{\sin(3x)}{x}$."),
                    p(r"$\sin(3x) \sim 3x$ cuando $x \to 0$, entonces $\frac{3x}{x} = 3$."),
                ],
            ),
            practice(&[
                r"$\lim_{x \to 0} \frac{\tan(2x)}{x} = 2$",
                r"$\lim_{x \to 0} \frac{\arcsin(4x)}{x} = 4$",
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_page_per_route() {
        let all = pages();
        assert_eq!(all.len(), Route::ALL.len());
        for (page, route) in all.iter().zip(Route::ALL) {
            assert_eq!(page.route, route);
        }
    }

    #[test]
    fn only_lesson_two_hosts_the_visualizer() {
        for page in pages() {
            assert_eq!(page.has_visualizer(), page.route == Route::EpsilonDelta);
        }
    }

    #[test]
    fn course_formulas_are_well_formed() {
        for page in pages() {
            for f in page.formulas() {
                assert_eq!(f.check(), Ok(()), "{:?}: {}", page.route, f.tex);
            }
        }
    }

    #[test]
    fn equivalence_table_has_six_rows() {
        let page = page(Route::Infinitesimals);
        let rows = page.blocks.iter().find_map(|b| match b {
            Block::EquivalenceTable { rows, .. } => Some(rows.len()),
            _ => None,
        });
        assert_eq!(rows, Some(6));
    }
}
